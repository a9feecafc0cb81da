//! Configuration options for citation rendering.
//!
//! This module provides the [`RenderConfig`] struct which controls the parts of
//! the output that are not fixed by the citation style itself: the language
//! used to spell edition ordinals and the markup used for italics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Language used to spell out numeric editions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrdinalLocale {
    /// English ordinals (`first`, `second`, `twenty-first`, ...)
    #[default]
    English,
}

impl fmt::Display for OrdinalLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "English"),
        }
    }
}

impl OrdinalLocale {
    /// Returns the BCP 47 language tag for this locale.
    #[must_use]
    pub const fn language_tag(&self) -> &'static str {
        match self {
            Self::English => "en",
        }
    }
}

/// Open/close delimiters placed around italicized titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emphasis {
    /// Opening delimiter
    pub open: String,
    /// Closing delimiter
    pub close: String,
}

impl Default for Emphasis {
    fn default() -> Self {
        Self {
            open: "<I>".to_string(),
            close: "</I>".to_string(),
        }
    }
}

/// Configuration for citation rendering.
///
/// # Examples
///
/// ```
/// use iso690::config::{Emphasis, RenderConfig};
///
/// // Default configuration (English ordinals, <I>...</I> italics)
/// let config = RenderConfig::default();
///
/// // HTML emphasis instead
/// let config = RenderConfig {
///     emphasis: Emphasis { open: "<em>".into(), close: "</em>".into() },
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Language for spelled-out edition ordinals.
    pub ordinal_locale: OrdinalLocale,

    /// Markup used for titles of included works.
    pub emphasis: Emphasis,
}

impl RenderConfig {
    /// Read a configuration from JSON; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
