#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # ISO 690 citation rendering
//!
//! Renders structured bibliographic records (`<bibitem>` trees) as reference
//! citations in the ISO 690 style.
//!
//! ## Quick Start
//!
//! ### Rendering bibitem XML
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let xml = r#"<bibitem type="book">
//!     <title>Widgets</title>
//!     <contributor>
//!         <role type="author"/>
//!         <organization><name>ACME</name></organization>
//!     </contributor>
//!     <edition>2</edition>
//! </bibitem>"#;
//!
//! assert_eq!(iso690::render_xml(xml)?, " ACME. Widgets. second.");
//! # Ok(())
//! # }
//! ```
//!
//! ### Rendering a record built in code
//!
//! ```
//! use iso690::{Bibitem, BibitemType, Contributor, ContributorRole, DocIdentifier, Person};
//!
//! let item = Bibitem::builder(BibitemType::Article)
//!     .contributor(Contributor::person(
//!         ContributorRole::Author,
//!         Person::new("Smith").forename("John"),
//!     ))
//!     .title("On Widgets")
//!     .doc_identifier(DocIdentifier::typed("DOI", "10.1000/1"))
//!     .build();
//!
//! assert_eq!(
//!     iso690::render(&item),
//!     " SMITH, John. <I>On Widgets</I>. DOI 10.1000/1."
//! );
//! ```
//!
//! ## Modules
//!
//! - [`bibitem`]: Typed record model (`Bibitem`, `Contributor`, `Series`, ...)
//! - [`bibxml`]: Reading bibitem XML into a `Bibitem`
//! - [`render`]: The citation renderer and per-element formatters
//! - [`names`]: Creator name resolution and joining
//! - [`ordinal`]: Spelled-out ordinals for numeric editions
//! - [`config`]: Rendering options
//! - [`error`]: Error types and result type

pub mod bibitem;
pub mod bibxml;
pub mod config;
pub mod error;
pub mod names;
pub mod ordinal;
pub mod render;

pub use bibitem::{
    BibDate, Bibitem, BibitemBuilder, BibitemType, Contributor, ContributorRole, DocIdentifier,
    Entity, Organization, Person, Series,
};
pub use bibxml::parse_bibitem;
pub use config::{Emphasis, OrdinalLocale, RenderConfig};
pub use error::{Iso690Error, Result};
pub use render::{render, render_xml, Renderer};
