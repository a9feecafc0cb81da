//! Bibliographic item (bibitem) data model.
//!
//! A [`Bibitem`] is the typed form of one `<bibitem>` tree: a record type,
//! contributors, and a set of optional text fields. Every optional field is an
//! [`Option`], so absence is visible in the type rather than discovered by
//! querying markup.
//!
//! Records are usually produced by [`bibxml::parse_bibitem`](crate::bibxml::parse_bibitem),
//! but can also be assembled directly with [`Bibitem::builder`] or read from
//! JSON with [`Bibitem::from_json`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Kind of bibliographic item, taken from the `type` attribute of `<bibitem>`.
///
/// Only [`Article`](BibitemType::Article) and
/// [`Presentation`](BibitemType::Presentation) change how a citation is
/// rendered; every other value is kept verbatim in [`Other`](BibitemType::Other).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BibitemType {
    /// A book (the default when no type is given)
    #[default]
    Book,
    /// An article within a journal or collection
    Article,
    /// A presentation given at an event
    Presentation,
    /// Any other record type (`standard`, `website`, `journal`, ...)
    Other(String),
}

impl BibitemType {
    /// Parse a `type` attribute value. Matching is exact and case-sensitive.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "book" => Self::Book,
            "article" => Self::Article,
            "presentation" => Self::Presentation,
            other => Self::Other(other.to_string()),
        }
    }

    /// Attribute form of this type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Book => "book",
            Self::Article => "article",
            Self::Presentation => "presentation",
            Self::Other(value) => value,
        }
    }

    /// Whether this type denotes an included work, whose titles are set in
    /// italics.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso690::BibitemType;
    ///
    /// assert!(BibitemType::Article.is_included_work());
    /// assert!(!BibitemType::Book.is_included_work());
    /// ```
    #[must_use]
    pub fn is_included_work(&self) -> bool {
        matches!(self, Self::Article | Self::Presentation)
    }
}

impl fmt::Display for BibitemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for BibitemType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<BibitemType> for String {
    fn from(value: BibitemType) -> Self {
        value.as_str().to_string()
    }
}

/// Role a contributor plays for the item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContributorRole {
    /// Author of the work
    Author,
    /// Performer of the work
    Performer,
    /// Publisher of the work
    Publisher,
    /// Adapter of the work
    Adapter,
    /// Translator of the work
    Translator,
    /// Distributor of the work
    Distributor,
    /// Any other role (`editor`, `owner`, ...)
    Other(String),
}

impl ContributorRole {
    /// Roles that can supply the creator names of a citation, most preferred
    /// first.
    pub const CREATOR_PRIORITY: [ContributorRole; 6] = [
        ContributorRole::Author,
        ContributorRole::Performer,
        ContributorRole::Publisher,
        ContributorRole::Adapter,
        ContributorRole::Translator,
        ContributorRole::Distributor,
    ];

    /// Parse a role name. Matching is exact and case-sensitive.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "author" => Self::Author,
            "performer" => Self::Performer,
            "publisher" => Self::Publisher,
            "adapter" => Self::Adapter,
            "translator" => Self::Translator,
            "distributor" => Self::Distributor,
            other => Self::Other(other.to_string()),
        }
    }

    /// Role name as it appears in bibitem markup.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Author => "author",
            Self::Performer => "performer",
            Self::Publisher => "publisher",
            Self::Adapter => "adapter",
            Self::Translator => "translator",
            Self::Distributor => "distributor",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for ContributorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ContributorRole {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ContributorRole> for String {
    fn from(value: ContributorRole) -> Self {
        value.as_str().to_string()
    }
}

/// A corporate contributor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Organization {
    /// Organization name, if given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Organization {
    /// Create an organization with the given name
    #[must_use]
    pub fn new(name: &str) -> Self {
        Organization {
            name: Some(name.to_string()),
        }
    }
}

/// A personal contributor.
///
/// A person is identified either by a complete name, used verbatim, or by a
/// surname with optional forenames and initials.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Person {
    /// Full name as a single string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completename: Option<String>,
    /// Family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    /// Given names, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forenames: Vec<String>,
    /// Initials, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub initials: Vec<String>,
}

impl Person {
    /// Create a person known by surname only
    #[must_use]
    pub fn new(surname: &str) -> Self {
        Person {
            surname: Some(surname.to_string()),
            ..Person::default()
        }
    }

    /// Create a person known by a complete name
    #[must_use]
    pub fn with_completename(completename: &str) -> Self {
        Person {
            completename: Some(completename.to_string()),
            ..Person::default()
        }
    }

    /// Append a forename
    #[must_use]
    pub fn forename(mut self, forename: &str) -> Self {
        self.forenames.push(forename.to_string());
        self
    }

    /// Append an initial
    #[must_use]
    pub fn initial(mut self, initial: &str) -> Self {
        self.initials.push(initial.to_string());
        self
    }
}

/// The party behind a contributor entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    /// A corporate body
    Organization(Organization),
    /// An individual
    Person(Person),
}

/// A party associated with the item through one or more roles.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contributor {
    /// Roles held by this contributor
    #[serde(default)]
    pub roles: Vec<ContributorRole>,
    /// The organization or person; `None` when the entry names neither
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<Entity>,
}

impl Contributor {
    /// Create a contributor with one role and no entity
    #[must_use]
    pub fn new(role: ContributorRole) -> Self {
        Contributor {
            roles: vec![role],
            entity: None,
        }
    }

    /// Create an organizational contributor
    #[must_use]
    pub fn organization(role: ContributorRole, name: &str) -> Self {
        Contributor {
            roles: vec![role],
            entity: Some(Entity::Organization(Organization::new(name))),
        }
    }

    /// Create a personal contributor
    #[must_use]
    pub fn person(role: ContributorRole, person: Person) -> Self {
        Contributor {
            roles: vec![role],
            entity: Some(Entity::Person(person)),
        }
    }

    /// Add another role to this contributor
    #[must_use]
    pub fn with_role(mut self, role: ContributorRole) -> Self {
        self.roles.push(role);
        self
    }

    /// Whether this contributor holds `role`
    #[must_use]
    pub fn has_role(&self, role: &ContributorRole) -> bool {
        self.roles.contains(role)
    }

    /// The organization, if this contributor is one
    #[must_use]
    pub fn organization_entity(&self) -> Option<&Organization> {
        match &self.entity {
            Some(Entity::Organization(org)) => Some(org),
            _ => None,
        }
    }
}

/// A series the item belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Series {
    /// Series type (`main`, `alt`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Pre-formatted series reference, used verbatim when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_ref: Option<String>,
    /// Series title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Issue number within the series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Part number within the issue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_number: Option<String>,
}

/// A document identifier such as an ISBN or a standard reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocIdentifier {
    /// Identifier scheme (`ISBN`, `ISO`, `DOI`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Identifier value
    pub id: String,
}

impl DocIdentifier {
    /// Identifier with a scheme
    #[must_use]
    pub fn typed(kind: &str, id: &str) -> Self {
        DocIdentifier {
            kind: Some(kind.to_string()),
            id: id.to_string(),
        }
    }

    /// Identifier without a scheme
    #[must_use]
    pub fn untyped(id: &str) -> Self {
        DocIdentifier {
            kind: None,
            id: id.to_string(),
        }
    }
}

/// A dated event in the item's history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BibDate {
    /// Event type (`published`, `issued`, `accessed`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Date value as written in the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl BibDate {
    /// Publication date
    #[must_use]
    pub fn published(value: &str) -> Self {
        BibDate {
            kind: Some("published".to_string()),
            value: Some(value.to_string()),
        }
    }
}

/// One bibliographic item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bibitem {
    /// Record type
    #[serde(default, rename = "type")]
    pub kind: BibitemType,
    /// Contributors in document order
    #[serde(default)]
    pub contributors: Vec<Contributor>,
    /// Main title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Medium (`online`, `CD-ROM`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    /// Edition, either a number or free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    /// Place of publication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    /// Dates in document order
    #[serde(default)]
    pub dates: Vec<BibDate>,
    /// Series in document order
    #[serde(default)]
    pub series: Vec<Series>,
    /// Document identifiers in document order
    #[serde(default)]
    pub doc_identifiers: Vec<DocIdentifier>,
    /// Where the item can be accessed (usually a URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_location: Option<String>,
}

impl Bibitem {
    /// Create an empty item of the given type
    #[must_use]
    pub fn new(kind: BibitemType) -> Self {
        Bibitem {
            kind,
            ..Bibitem::default()
        }
    }

    /// Create a builder for fluently constructing items
    ///
    /// # Examples
    ///
    /// ```
    /// use iso690::{Bibitem, BibitemType, Contributor, ContributorRole};
    ///
    /// let item = Bibitem::builder(BibitemType::Book)
    ///     .contributor(Contributor::organization(ContributorRole::Author, "ACME"))
    ///     .title("Widgets")
    ///     .build();
    ///
    /// assert_eq!(item.title(), Some("Widgets"));
    /// ```
    #[must_use]
    pub fn builder(kind: BibitemType) -> BibitemBuilder {
        BibitemBuilder {
            item: Bibitem::new(kind),
        }
    }

    /// Record type
    #[must_use]
    pub fn kind(&self) -> &BibitemType {
        &self.kind
    }

    /// Main title
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Medium
    #[must_use]
    pub fn medium(&self) -> Option<&str> {
        self.medium.as_deref()
    }

    /// Edition text
    #[must_use]
    pub fn edition(&self) -> Option<&str> {
        self.edition.as_deref()
    }

    /// Place of publication
    #[must_use]
    pub fn place(&self) -> Option<&str> {
        self.place.as_deref()
    }

    /// Access location
    #[must_use]
    pub fn access_location(&self) -> Option<&str> {
        self.access_location.as_deref()
    }

    /// Document identifiers in document order
    #[must_use]
    pub fn doc_identifiers(&self) -> &[DocIdentifier] {
        &self.doc_identifiers
    }

    /// Contributors holding `role`, in document order
    pub fn contributors_with_role(
        &self,
        role: ContributorRole,
    ) -> impl Iterator<Item = &Contributor> + '_ {
        self.contributors.iter().filter(move |c| c.has_role(&role))
    }

    /// Name of the first publisher organization that has one.
    ///
    /// This is independent of which role supplies the creator names.
    #[must_use]
    pub fn publisher_name(&self) -> Option<&str> {
        self.contributors_with_role(ContributorRole::Publisher)
            .filter_map(Contributor::organization_entity)
            .find_map(|org| org.name.as_deref())
    }

    /// Publication date.
    ///
    /// The first date typed `published`. Untyped and otherwise typed dates
    /// never count.
    #[must_use]
    pub fn published_date(&self) -> Option<&str> {
        self.dates
            .iter()
            .find(|d| d.kind.as_deref() == Some("published"))
            .and_then(|d| d.value.as_deref())
    }

    /// The series to cite: typed `main`, else untyped, else the first one.
    #[must_use]
    pub fn main_series(&self) -> Option<&Series> {
        self.series
            .iter()
            .find(|s| s.kind.as_deref() == Some("main"))
            .or_else(|| self.series.iter().find(|s| s.kind.is_none()))
            .or_else(|| self.series.first())
    }

    /// Read an item from its JSON representation
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or does not describe a bibitem.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write this item as JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Builder for fluently constructing bibliographic items
#[derive(Debug)]
pub struct BibitemBuilder {
    item: Bibitem,
}

impl BibitemBuilder {
    /// Add a contributor
    #[must_use]
    pub fn contributor(mut self, contributor: Contributor) -> Self {
        self.item.contributors.push(contributor);
        self
    }

    /// Set the main title
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.item.title = Some(title.to_string());
        self
    }

    /// Set the medium
    #[must_use]
    pub fn medium(mut self, medium: &str) -> Self {
        self.item.medium = Some(medium.to_string());
        self
    }

    /// Set the edition
    #[must_use]
    pub fn edition(mut self, edition: &str) -> Self {
        self.item.edition = Some(edition.to_string());
        self
    }

    /// Set the place of publication
    #[must_use]
    pub fn place(mut self, place: &str) -> Self {
        self.item.place = Some(place.to_string());
        self
    }

    /// Add a date
    #[must_use]
    pub fn date(mut self, date: BibDate) -> Self {
        self.item.dates.push(date);
        self
    }

    /// Add a series
    #[must_use]
    pub fn series(mut self, series: Series) -> Self {
        self.item.series.push(series);
        self
    }

    /// Add a document identifier
    #[must_use]
    pub fn doc_identifier(mut self, id: DocIdentifier) -> Self {
        self.item.doc_identifiers.push(id);
        self
    }

    /// Set the access location
    #[must_use]
    pub fn access_location(mut self, location: &str) -> Self {
        self.item.access_location = Some(location.to_string());
        self
    }

    /// Build the item
    #[must_use]
    pub fn build(self) -> Bibitem {
        self.item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_defaults_to_book() {
        assert_eq!(Bibitem::default().kind(), &BibitemType::Book);
    }

    #[test]
    fn test_type_parse_keeps_unknown_values() {
        assert_eq!(BibitemType::parse("article"), BibitemType::Article);
        let standard = BibitemType::parse("standard");
        assert_eq!(standard, BibitemType::Other("standard".to_string()));
        assert_eq!(standard.to_string(), "standard");
        assert!(!standard.is_included_work());
        assert!(BibitemType::Presentation.is_included_work());
    }

    #[test]
    fn test_role_parse_is_case_sensitive() {
        assert_eq!(ContributorRole::parse("author"), ContributorRole::Author);
        assert_eq!(
            ContributorRole::parse("Author"),
            ContributorRole::Other("Author".to_string())
        );
    }

    #[test]
    fn test_publisher_name_skips_people_and_unnamed_orgs() {
        let item = Bibitem::builder(BibitemType::Book)
            .contributor(Contributor::person(
                ContributorRole::Publisher,
                Person::new("Doe"),
            ))
            .contributor(Contributor {
                roles: vec![ContributorRole::Publisher],
                entity: Some(Entity::Organization(Organization::default())),
            })
            .contributor(Contributor::organization(ContributorRole::Publisher, "ISO"))
            .build();

        assert_eq!(item.publisher_name(), Some("ISO"));
    }

    #[test]
    fn test_publisher_name_ignores_other_roles() {
        let item = Bibitem::builder(BibitemType::Book)
            .contributor(Contributor::organization(ContributorRole::Author, "ACME"))
            .build();
        assert_eq!(item.publisher_name(), None);
    }

    #[test]
    fn test_published_date_prefers_published_type() {
        let item = Bibitem::builder(BibitemType::Book)
            .date(BibDate {
                kind: None,
                value: Some("1999".to_string()),
            })
            .date(BibDate {
                kind: Some("issued".to_string()),
                value: Some("2019".to_string()),
            })
            .date(BibDate::published("2020"))
            .build();
        assert_eq!(item.published_date(), Some("2020"));
    }

    #[test]
    fn test_published_date_ignores_other_typed_dates() {
        let item = Bibitem::builder(BibitemType::Book)
            .date(BibDate {
                kind: Some("accessed".to_string()),
                value: Some("2021-05-01".to_string()),
            })
            .build();
        assert_eq!(item.published_date(), None);
    }

    #[test]
    fn test_published_date_ignores_untyped_dates() {
        let item = Bibitem::builder(BibitemType::Book)
            .date(BibDate {
                kind: None,
                value: Some("1999".to_string()),
            })
            .build();
        assert_eq!(item.published_date(), None);
    }

    #[test]
    fn test_main_series_precedence() {
        let untyped = Series {
            title: Some("Untyped".to_string()),
            ..Series::default()
        };
        let alt = Series {
            kind: Some("alt".to_string()),
            title: Some("Alt".to_string()),
            ..Series::default()
        };
        let main = Series {
            kind: Some("main".to_string()),
            title: Some("Main".to_string()),
            ..Series::default()
        };

        let item = Bibitem::builder(BibitemType::Book)
            .series(alt.clone())
            .series(untyped.clone())
            .series(main)
            .build();
        assert_eq!(item.main_series().unwrap().title.as_deref(), Some("Main"));

        let item = Bibitem::builder(BibitemType::Book)
            .series(alt.clone())
            .series(untyped)
            .build();
        assert_eq!(
            item.main_series().unwrap().title.as_deref(),
            Some("Untyped")
        );

        let item = Bibitem::builder(BibitemType::Book).series(alt).build();
        assert_eq!(item.main_series().unwrap().title.as_deref(), Some("Alt"));

        assert!(Bibitem::default().main_series().is_none());
    }

    #[test]
    fn test_json_roundtrip() {
        let item = Bibitem::builder(BibitemType::Article)
            .contributor(Contributor::person(
                ContributorRole::Author,
                Person::new("Smith").forename("John"),
            ))
            .title("On Widgets")
            .doc_identifier(DocIdentifier::typed("DOI", "10.1000/1"))
            .build();

        let json = item.to_json().unwrap();
        assert!(json.contains(r#""type":"article""#));
        assert!(json.contains(r#""roles":["author"]"#));

        let restored = Bibitem::from_json(&json).unwrap();
        assert_eq!(restored, item);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Bibitem::from_json("{not json").is_err());
    }
}
