//! Integration tests for rendering bibitem XML documents end to end.

mod common;

use common::{create_widgets_book, init_tracing, load_fixture};
use iso690::{
    parse_bibitem, render, render_xml, Bibitem, BibitemType, Contributor, ContributorRole,
    Emphasis, Iso690Error, Person, RenderConfig, Renderer, Series,
};

#[test]
fn test_render_widgets_book_fixture() {
    let xml = load_fixture("widgets_book.xml");
    assert_eq!(
        render_xml(&xml).expect("Failed to render fixture"),
        " ACME. Widgets. Geneva: ISO. 2020."
    );
}

#[test]
fn test_fixture_matches_built_record() {
    let parsed = parse_bibitem(&load_fixture("widgets_book.xml")).expect("Failed to parse");
    assert_eq!(render(&parsed), render(&create_widgets_book()));
}

#[test]
fn test_render_conference_paper_fixture() {
    init_tracing();
    let xml = load_fixture("conference_paper.xml");
    let expected = concat!(
        " VAN DER BERG, A. B., Grace Hopper, and Widget Lab.",
        " <I>Rendering citations without surprises</I>.",
        " [video].",
        " twenty-first.",
        " Oslo: Conference Press.",
        " 2023-06-14.",
        "  <I>Proceedings</I>. 7.2.",
        " DOI 10.1000/xyz123. internal-42.",
        "At: https://example.org/talks/42.",
    );
    assert_eq!(render_xml(&xml).expect("Failed to render fixture"), expected);
}

#[test]
fn test_render_standard_fixture() {
    let xml = load_fixture("standard.xml");
    let expected = concat!(
        " ISO.",
        " Information and documentation.",
        " Fourth edition.",
        " ISO.",
        " ISO/TC 46.",
        " ISO ISO 690:2021. URN urn:iso:std:iso:690:ed-4.",
    );
    assert_eq!(render_xml(&xml).expect("Failed to render fixture"), expected);
}

#[test]
fn test_render_with_custom_config() {
    let config = RenderConfig::from_json(r#"{"emphasis": {"open": "*", "close": "*"}}"#)
        .expect("Failed to read config");
    let renderer = Renderer::new(config);

    let xml = r#"<bibitem type="article"><title>Widgets</title></bibitem>"#;
    assert_eq!(renderer.render_xml(xml).unwrap(), " *Widgets*.");
    assert_eq!(
        renderer.config().emphasis,
        Emphasis {
            open: "*".to_string(),
            close: "*".to_string()
        }
    );
}

#[test]
fn test_render_is_repeatable() {
    let item = create_widgets_book();
    let renderer = Renderer::default();
    let first = renderer.render(&item);
    assert_eq!(renderer.render(&item), first);
    assert_eq!(item, create_widgets_book());
}

#[test]
fn test_renderer_shared_across_threads() {
    let renderer = std::sync::Arc::new(Renderer::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let renderer = std::sync::Arc::clone(&renderer);
            std::thread::spawn(move || renderer.render(&create_widgets_book()))
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().expect("render thread panicked"),
            " ACME. Widgets. Geneva: ISO. 2020."
        );
    }
}

#[test]
fn test_empty_bibitem_renders_empty() {
    assert_eq!(render_xml("<bibitem/>").unwrap(), "");
    assert_eq!(render_xml(r#"<bibitem type="article"></bibitem>"#).unwrap(), "");
}

#[test]
fn test_malformed_input_is_an_error() {
    init_tracing();
    for xml in ["", "<bibitem>", "<bibitem><title>x</bibitem>", "<references/>"] {
        match render_xml(xml) {
            Err(Iso690Error::MalformedInput(_)) => {}
            other => panic!("expected MalformedInput for {xml:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_creator_roles_are_not_merged() {
    let item = Bibitem::builder(BibitemType::Book)
        .contributor(Contributor::person(
            ContributorRole::Translator,
            Person::new("Roe").forename("Jane"),
        ))
        .contributor(Contributor::person(
            ContributorRole::Adapter,
            Person::new("Doe").initial("J."),
        ))
        .build();
    assert_eq!(render(&item), " DOE, J..");
}

#[test]
fn test_series_main_beats_untyped() {
    let xml = r#"<bibitem>
        <series><title>Untyped</title></series>
        <series type="main"><title>Main</title></series>
    </bibitem>"#;
    assert_eq!(render_xml(xml).unwrap(), "  Main..");

    let item = Bibitem::builder(BibitemType::Book)
        .series(Series {
            kind: Some("alt".to_string()),
            number: Some("9".to_string()),
            ..Series::default()
        })
        .build();
    assert_eq!(render(&item), "  9.");
}

#[test]
fn test_json_record_renders_like_xml() {
    let json = r#"{
        "type": "book",
        "contributors": [
            {"roles": ["author"], "entity": {"organization": {"name": "ACME"}}},
            {"roles": ["publisher"], "entity": {"organization": {"name": "ISO"}}}
        ],
        "title": "Widgets",
        "place": "Geneva",
        "dates": [{"kind": "published", "value": "2020"}]
    }"#;

    let item = Bibitem::from_json(json).expect("Failed to read JSON record");
    assert_eq!(render(&item), " ACME. Widgets. Geneva: ISO. 2020.");
}
