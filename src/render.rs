//! ISO 690 citation rendering.
//!
//! A citation is assembled from nine elements, always in this order:
//!
//! | # | Element | Wrapped as |
//! |---|---------|------------|
//! | 1 | Creator names | ` <v>.` |
//! | 2 | Title | ` <I><v></I>.` for included works, else ` <v>.` |
//! | 3 | Medium | ` [<v>].` |
//! | 4 | Edition | ` <v>.` |
//! | 5 | Place and publisher | ` <v>.` |
//! | 6 | Publication date | ` <v>.` |
//! | 7 | Series | ` <v>.` |
//! | 8 | Standard identifiers | ` <v>.` |
//! | 9 | Access location | `At: <v>.` |
//!
//! Each element is computed on its own and an empty element contributes
//! nothing, so a record with no recognized fields renders as `""`.
//!
//! # Examples
//!
//! ```
//! use iso690::{render, BibDate, Bibitem, BibitemType, Contributor, ContributorRole};
//!
//! let item = Bibitem::builder(BibitemType::Book)
//!     .contributor(Contributor::organization(ContributorRole::Author, "ACME"))
//!     .contributor(Contributor::organization(ContributorRole::Publisher, "ISO"))
//!     .title("Widgets")
//!     .place("Geneva")
//!     .date(BibDate::published("2020"))
//!     .build();
//!
//! assert_eq!(render(&item), " ACME. Widgets. Geneva: ISO. 2020.");
//! ```

use tracing::{debug, trace};

use crate::bibitem::Bibitem;
use crate::bibxml::parse_bibitem;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::names::creator_names;
use crate::ordinal::spell_numeric_ordinal;

/// Surround `text` with `start` and `end`; empty text stays empty.
///
/// # Examples
///
/// ```
/// use iso690::render::wrap;
///
/// assert_eq!(wrap("Geneva", " ", "."), " Geneva.");
/// assert_eq!(wrap("", " [", "]."), "");
/// ```
#[must_use]
pub fn wrap(text: &str, start: &str, end: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!("{start}{text}{end}")
}

fn wrap_plain(text: &str) -> String {
    wrap(text, " ", ".")
}

/// Renders bibliographic items as ISO 690 citations.
///
/// A renderer holds only its configuration, so one instance can be shared
/// freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a renderer with the given configuration
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Renderer { config }
    }

    /// The configuration in use
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render one item as a citation string.
    #[must_use]
    pub fn render(&self, item: &Bibitem) -> String {
        debug!(
            kind = %item.kind(),
            locale = self.config.ordinal_locale.language_tag(),
            "Rendering bibitem"
        );

        let mut out = String::new();
        out.push_str(&wrap_plain(&creator_names(item)));
        out.push_str(&self.title(item));
        out.push_str(&wrap(&medium(item), " [", "]."));
        out.push_str(&wrap_plain(&self.edition(item)));
        out.push_str(&wrap_plain(&place_publisher(item)));
        out.push_str(&wrap_plain(&published_date(item)));
        out.push_str(&wrap_plain(&self.series(item)));
        out.push_str(&wrap_plain(&standard_identifiers(item)));
        out.push_str(&wrap(&access_location(item), "At: ", "."));
        out
    }

    /// Parse bibitem XML and render it.
    ///
    /// # Errors
    ///
    /// Returns [`Iso690Error::MalformedInput`](crate::Iso690Error::MalformedInput)
    /// if the XML cannot be read as a `<bibitem>` tree. Missing fields are never
    /// an error.
    pub fn render_xml(&self, xml: &str) -> Result<String> {
        let item = parse_bibitem(xml)?;
        Ok(self.render(&item))
    }

    /// Wrapped title: italics for included works, plain otherwise.
    #[must_use]
    pub fn title(&self, item: &Bibitem) -> String {
        self.title_like(item, item.title().unwrap_or_default())
    }

    fn title_like(&self, item: &Bibitem, text: &str) -> String {
        if item.kind().is_included_work() {
            let emphasis = &self.config.emphasis;
            wrap(
                text,
                &format!(" {}", emphasis.open),
                &format!("{}.", emphasis.close),
            )
        } else {
            wrap_plain(text)
        }
    }

    /// Edition statement, with bare numbers spelled out as ordinals.
    #[must_use]
    pub fn edition(&self, item: &Bibitem) -> String {
        let Some(edition) = item.edition() else {
            return String::new();
        };
        match spell_numeric_ordinal(edition, self.config.ordinal_locale) {
            Some(spelled) => {
                trace!(edition, spelled = %spelled, "Spelled numeric edition");
                spelled
            }
            None => edition.to_string(),
        }
    }

    /// Series statement of the item's main series.
    ///
    /// A pre-formatted reference is used verbatim. Otherwise the title (styled
    /// like the main title) is followed by ` <number>` and `.<partnumber>`.
    #[must_use]
    pub fn series(&self, item: &Bibitem) -> String {
        let Some(series) = item.main_series() else {
            return String::new();
        };
        if let Some(formatted) = &series.formatted_ref {
            return formatted.clone();
        }

        let mut out = String::new();
        if let Some(title) = &series.title {
            out.push_str(&self.title_like(item, title));
        }
        if let Some(number) = &series.number {
            out.push(' ');
            out.push_str(number);
        }
        if let Some(part) = &series.part_number {
            out.push('.');
            out.push_str(part);
        }
        out
    }
}

/// Medium text, unwrapped.
#[must_use]
pub fn medium(item: &Bibitem) -> String {
    item.medium().unwrap_or_default().to_string()
}

/// `<place>: <publisher>`, or whichever of the two is present.
#[must_use]
pub fn place_publisher(item: &Bibitem) -> String {
    match (item.place(), item.publisher_name()) {
        (Some(place), Some(publisher)) => format!("{place}: {publisher}"),
        (Some(place), None) => place.to_string(),
        (None, Some(publisher)) => publisher.to_string(),
        (None, None) => String::new(),
    }
}

/// Publication date text, unwrapped.
#[must_use]
pub fn published_date(item: &Bibitem) -> String {
    item.published_date().unwrap_or_default().to_string()
}

/// Document identifiers as `<type> <id>` (or bare `<id>`), joined by `". "`.
#[must_use]
pub fn standard_identifiers(item: &Bibitem) -> String {
    item.doc_identifiers()
        .iter()
        .map(|id| match &id.kind {
            Some(kind) => format!("{kind} {}", id.id),
            None => id.id.clone(),
        })
        .collect::<Vec<_>>()
        .join(". ")
}

/// Access location text, unwrapped.
#[must_use]
pub fn access_location(item: &Bibitem) -> String {
    item.access_location().unwrap_or_default().to_string()
}

/// Render an item with the default configuration.
#[must_use]
pub fn render(item: &Bibitem) -> String {
    Renderer::default().render(item)
}

/// Parse bibitem XML and render it with the default configuration.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let xml = r#"<bibitem type="article">
///     <title>On Widgets</title>
///     <contributor>
///         <role type="author"/>
///         <person><name><surname>Smith</surname><forename>John</forename></name></person>
///     </contributor>
/// </bibitem>"#;
///
/// assert_eq!(iso690::render_xml(xml)?, " SMITH, John. <I>On Widgets</I>.");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`Iso690Error::MalformedInput`](crate::Iso690Error::MalformedInput)
/// if the XML cannot be read as a `<bibitem>` tree.
pub fn render_xml(xml: &str) -> Result<String> {
    Renderer::default().render_xml(xml)
}
