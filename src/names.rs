//! Creator name resolution.
//!
//! Turns contributors into display names and joins them into the creator
//! element of a citation. Only one role ever supplies creators: the first role
//! of [`ContributorRole::CREATOR_PRIORITY`] that any contributor holds.

use tracing::trace;

use crate::bibitem::{Bibitem, Contributor, ContributorRole, Entity, Organization, Person};

/// Placeholder for a contributor whose name cannot be determined.
pub const UNKNOWN_NAME: &str = "--";

/// Join display names into one creator string.
///
/// # Examples
///
/// ```
/// use iso690::names::join_names;
///
/// assert_eq!(join_names::<&str>(&[]), "");
/// assert_eq!(join_names(&["A"]), "A");
/// assert_eq!(join_names(&["A", "B"]), "A and B");
/// assert_eq!(join_names(&["A", "B", "C"]), "A, B, and C");
/// ```
#[must_use]
pub fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|name| name.as_ref()).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Display name of an organization: its name, or `--` when it has none.
#[must_use]
pub fn organization_name(org: &Organization) -> String {
    org.name.as_deref().unwrap_or(UNKNOWN_NAME).to_string()
}

/// Display name of a person.
///
/// A complete name is used verbatim. Otherwise the surname is upper-cased and
/// followed by a comma and the given names: forenames when there are any,
/// else initials, else nothing at all.
///
/// # Examples
///
/// ```
/// use iso690::Person;
/// use iso690::names::person_name;
///
/// let person = Person::new("Smith").forename("John").forename("Q");
/// assert_eq!(person_name(&person), "SMITH, John Q");
/// assert_eq!(person_name(&Person::new("Lee")), "LEE, ");
/// ```
#[must_use]
pub fn person_name(person: &Person) -> String {
    if let Some(completename) = &person.completename {
        return completename.clone();
    }

    let surname = person.surname.as_deref().unwrap_or_default().to_uppercase();
    let given = if person.forenames.is_empty() {
        person.initials.join(" ")
    } else {
        person.forenames.join(" ")
    };

    format!("{surname}, {given}")
}

/// Display name of a contributor, `--` when it names neither an organization
/// nor a person.
#[must_use]
pub fn contributor_name(contributor: &Contributor) -> String {
    match &contributor.entity {
        Some(Entity::Organization(org)) => organization_name(org),
        Some(Entity::Person(person)) => person_name(person),
        None => UNKNOWN_NAME.to_string(),
    }
}

/// The role whose contributors are cited as creators, if any contributor
/// holds one of the creator roles.
#[must_use]
pub fn creator_role(item: &Bibitem) -> Option<ContributorRole> {
    ContributorRole::CREATOR_PRIORITY
        .into_iter()
        .find(|role| item.contributors.iter().any(|c| c.has_role(role)))
}

/// Creator names of an item, joined with [`join_names`].
///
/// Contributors of later roles are never merged with the winning role.
#[must_use]
pub fn creator_names(item: &Bibitem) -> String {
    let Some(role) = creator_role(item) else {
        return String::new();
    };
    trace!(role = %role, "selected creator role");

    let names: Vec<String> = item
        .contributors_with_role(role)
        .map(contributor_name)
        .collect();
    join_names(&names)
}
