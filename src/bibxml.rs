//! Bibitem XML deserialization.
//!
//! This module reads Relaton-style `<bibitem>` XML into a [`Bibitem`]. Parsing
//! happens in two steps: the document is first read into a small owned element
//! tree, and the typed record is then extracted from that tree with
//! child/attribute lookups. Nothing beyond the tree is ever followed.
//!
//! Namespace prefixes are ignored (`<rel:bibitem>` reads as `<bibitem>`) and
//! namespace declarations are dropped. Unknown elements are skipped.
//!
//! # Examples
//!
//! ```
//! use iso690::bibxml::parse_bibitem;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let item = parse_bibitem(r#"<bibitem type="article"><title>Widgets</title></bibitem>"#)?;
//! assert_eq!(item.title(), Some("Widgets"));
//! assert!(item.kind().is_included_work());
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use crate::bibitem::{
    BibDate, Bibitem, BibitemType, Contributor, ContributorRole, DocIdentifier, Entity,
    Organization, Person, Series,
};
use crate::error::{Iso690Error, Result};

/// Deepest element nesting accepted before the input is rejected.
pub const MAX_DEPTH: usize = 128;

const ROOT_ELEMENT: &str = "bibitem";

#[derive(Debug)]
enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Default)]
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter_map(move |node| match node {
            Node::Element(el) if el.name == name => Some(el),
            _ => None,
        })
    }

    fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find_map(|node| match node {
            Node::Element(el) if el.name == name => Some(el),
            _ => None,
        })
    }

    /// All descendant text in document order, trimmed at both ends.
    fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out.trim().to_string()
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }

    fn child_text(&self, name: &str) -> Option<String> {
        self.child(name).map(Element::text)
    }

    fn children_text(&self, name: &str) -> Vec<String> {
        self.children(name).map(Element::text).collect()
    }
}

fn malformed(message: impl Into<String>) -> Iso690Error {
    Iso690Error::MalformedInput(message.into())
}

fn local_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn start_element(start: &BytesStart) -> Result<Element> {
    let mut element = Element {
        name: local_name(start.local_name().as_ref()),
        ..Element::default()
    };

    for attr in start.attributes() {
        let attr = attr.map_err(|e| malformed(format!("Invalid attribute: {e}")))?;
        let key = attr.key.as_ref();
        if key == b"xmlns" || key.starts_with(b"xmlns:") {
            continue;
        }
        let value = attr
            .unescape_value()
            .map_err(|e| malformed(format!("Invalid attribute value: {e}")))?;
        element
            .attributes
            .push((local_name(attr.key.local_name().as_ref()), value.into_owned()));
    }

    Ok(element)
}

fn push_text(stack: &mut [Element], text: Cow<'_, str>) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(Node::Text(text.into_owned()));
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(malformed("Text outside of the root element")),
    }
}

/// Read a document into an element tree and return its root.
fn parse_tree(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    reader.expand_empty_elements(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                if root.is_some() {
                    return Err(malformed("Multiple root elements"));
                }
                if stack.len() >= MAX_DEPTH {
                    return Err(malformed(format!(
                        "Element nesting exceeds {MAX_DEPTH} levels"
                    )));
                }
                stack.push(start_element(e)?);
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| malformed("Closing tag without matching opening tag"))?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Element(element)),
                    None => root = Some(element),
                }
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| malformed(format!("Invalid text: {err}")))?;
                push_text(&mut stack, text)?;
            }
            Ok(Event::CData(e)) => {
                let bytes = e.into_inner();
                push_text(&mut stack, String::from_utf8_lossy(&bytes))?;
            }
            Ok(Event::Eof) => break,
            // Declarations, comments, processing instructions, doctype
            Ok(_) => {}
            Err(e) => {
                return Err(malformed(format!(
                    "XML error at position {}: {e}",
                    reader.buffer_position()
                )))
            }
        }
    }

    if let Some(open) = stack.last() {
        return Err(malformed(format!("Unclosed element <{}>", open.name)));
    }
    root.ok_or_else(|| malformed("Document has no root element"))
}

fn role_from_element(el: &Element) -> Option<ContributorRole> {
    // Relaton writes <role type="author"/>; plain <role>author</role> is accepted too.
    let name = match el.attr("type") {
        Some(value) => value.to_string(),
        None => el.text(),
    };
    (!name.is_empty()).then(|| ContributorRole::from(name))
}

fn person_from_element(el: &Element) -> Person {
    // Name parts may sit directly under <person> or inside its <name>.
    let parts = el.child("name").unwrap_or(el);
    Person {
        completename: parts.child_text("completename"),
        surname: parts.child_text("surname"),
        forenames: parts.children_text("forename"),
        initials: parts.children_text("initial"),
    }
}

fn contributor_from_element(el: &Element) -> Contributor {
    let roles = el.children("role").filter_map(role_from_element).collect();

    let entity = if let Some(org) = el.child("organization") {
        Some(Entity::Organization(Organization {
            name: org.child_text("name"),
        }))
    } else {
        el.child("person")
            .map(|person| Entity::Person(person_from_element(person)))
    };

    Contributor { roles, entity }
}

fn date_from_element(el: &Element) -> BibDate {
    BibDate {
        kind: el.attr("type").map(str::to_string),
        value: Some(el.child_text("on").unwrap_or_else(|| el.text())),
    }
}

fn series_from_element(el: &Element) -> Series {
    Series {
        kind: el.attr("type").map(str::to_string),
        formatted_ref: el.child_text("formattedref"),
        title: el.child_text("title"),
        number: el.child_text("number"),
        part_number: el.child_text("partnumber"),
    }
}

fn doc_identifier_from_element(el: &Element) -> DocIdentifier {
    DocIdentifier {
        kind: el.attr("type").map(str::to_string),
        id: el.text(),
    }
}

fn bibitem_from_element(root: &Element) -> Bibitem {
    Bibitem {
        kind: root.attr("type").map(BibitemType::parse).unwrap_or_default(),
        contributors: root
            .children("contributor")
            .map(contributor_from_element)
            .collect(),
        title: root.child_text("title"),
        medium: root.child_text("medium"),
        edition: root.child_text("edition"),
        place: root.child_text("place"),
        dates: root.children("date").map(date_from_element).collect(),
        series: root.children("series").map(series_from_element).collect(),
        doc_identifiers: root
            .children("docidentifier")
            .map(doc_identifier_from_element)
            .collect(),
        access_location: root.child_text("accessLocation"),
    }
}

/// Parse a `<bibitem>` XML document into a [`Bibitem`].
///
/// # Arguments
///
/// * `xml` - The bibitem XML string to parse
///
/// # Errors
///
/// Returns [`Iso690Error::MalformedInput`] if the XML is not well formed,
/// nests deeper than [`MAX_DEPTH`], has no root element, or its root element
/// is not `bibitem`. Missing fields are never an error.
pub fn parse_bibitem(xml: &str) -> Result<Bibitem> {
    let root = parse_tree(xml)?;
    if root.name != ROOT_ELEMENT {
        return Err(malformed(format!(
            "Expected <{ROOT_ELEMENT}> root element, found <{}>",
            root.name
        )));
    }

    let item = bibitem_from_element(&root);
    debug!(
        kind = %item.kind,
        contributors = item.contributors.len(),
        identifiers = item.doc_identifiers.len(),
        "Parsed bibitem"
    );
    Ok(item)
}
