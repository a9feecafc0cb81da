//! Error types for citation rendering.
//!
//! This module provides the [`Iso690Error`] type for all library operations
//! and the [`Result`] convenience type.
//!
//! Missing optional fields are never errors: they simply contribute nothing to
//! the rendered citation. Errors are reserved for input that cannot be turned
//! into a [`Bibitem`](crate::Bibitem) tree at all.

use thiserror::Error;

/// Error type for all ISO 690 library operations.
#[derive(Error, Debug)]
pub enum Iso690Error {
    /// The input is not a well-formed bibitem tree (unparseable XML, empty
    /// document, or a root element other than `bibitem`).
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A JSON representation of a record could not be read or written.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`Iso690Error`].
pub type Result<T> = std::result::Result<T, Iso690Error>;
