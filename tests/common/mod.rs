//! Common test helpers shared across the integration test suite.

use iso690::{BibDate, Bibitem, BibitemType, Contributor, ContributorRole};

/// Installs a test-friendly tracing subscriber, honoring `RUST_LOG`.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Reads an XML fixture from `tests/data`.
pub fn load_fixture(name: &str) -> String {
    let path = format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {path}"))
}

/// The book used throughout the suite: one corporate author, one publisher.
#[allow(dead_code)]
pub fn create_widgets_book() -> Bibitem {
    Bibitem::builder(BibitemType::Book)
        .contributor(Contributor::organization(ContributorRole::Author, "ACME"))
        .contributor(Contributor::organization(ContributorRole::Publisher, "ISO"))
        .title("Widgets")
        .place("Geneva")
        .date(BibDate::published("2020"))
        .build()
}
