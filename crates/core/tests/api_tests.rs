//! Library API integration tests
use sightline_core::*;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn fixture_root() -> String {
    get_fixture_path("root")
}

const FIRST_PLEA: &str =
    "First plea\nWe ask the council to keep the library open on Sundays.\nSigned,\nThe Readers";

#[test]
fn test_extract_root_api() {
    let extraction = Sightline::new().extract_root(fixture_root()).expect("should extract");

    let expected = format!(
        "{}\n\n{}\n\n{}\n\n{}\n",
        FIRST_PLEA,
        "Second plea, part one.\n\nPart two follows.",
        "# Third plea\n\nPlain notes are kept as written.",
        "Twelfth plea."
    );
    assert_eq!(extraction.document, expected);
    assert_eq!(extraction.units, 5);
    assert!(extraction.diagnostics.is_empty());
}

#[test]
fn test_sections_follow_numeric_order() {
    let extraction = Sightline::new().extract_root(fixture_root()).expect("should extract");
    let ids: Vec<_> = extraction.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "12"]);
}

#[test]
fn test_headers_mode() {
    let config = SightlineConfig::builder().headers(true).build();
    let extraction = Sightline::with_config(config).extract_root(fixture_root()).expect("should extract");

    assert!(extraction.document.starts_with("----- 001 -----\nFirst plea\n"));
    assert!(extraction.document.contains("\n\n----- 012 -----\nTwelfth plea.\n"));
    assert!(!extraction.document.contains("----- 005 -----"));
    assert!(extraction.document.ends_with("Twelfth plea.\n"));
}

#[test]
fn test_words_mode() {
    let config = SightlineConfig::builder().words(true).build();
    let extraction = Sightline::with_config(config).extract_root(fixture_root()).expect("should extract");

    assert_eq!(extraction.sections[0].body, "First plea We ask the council to keep the library open on Sundays Signed The Readers");
    assert_eq!(extraction.sections[3].body, "Twelfth plea");
}

#[test]
fn test_words_one_per_line_round_trip() {
    let config = SightlineConfig::builder().words(true).one_per_line(true).build();
    let extraction = Sightline::with_config(config).extract_root(fixture_root()).expect("should extract");

    let text = Sightline::new().extract_root(fixture_root()).unwrap().document;
    let tokens: Vec<_> = tokenize(&text).collect();
    let listed: Vec<_> = extraction.document.lines().filter(|line| !line.is_empty()).collect();
    assert_eq!(listed, tokens);
}

#[test]
fn test_hidden_regions_fixture() {
    let html = std::fs::read_to_string(get_fixture_path("hidden_regions.html")).unwrap();
    let extracted = extract_content(&html);

    assert_eq!(
        extracted.text,
        "Visible intro.\nSpaced declaration stays visible\nVisible outro."
    );
    assert_eq!(extracted.pruned.hidden, 4);
    assert_eq!(extracted.pruned.line_breaks, 0);
}

#[test]
fn test_hidden_subtree_text_never_leaks() {
    let html = std::fs::read_to_string(get_fixture_path("hidden_regions.html")).unwrap();
    let text = extract_visible_text(&html);

    for leaked in [
        "Hidden section",
        "breaks",
        "Aria hidden",
        "Hidden by class",
        "Invisible by style",
        "Template row",
        "JavaScript",
        "Chart label",
        "Canvas fallback",
        "Hidden regions",
    ] {
        assert!(!text.contains(leaked), "{leaked:?} leaked into {text:?}");
    }
}

#[test]
fn test_edge_case_malformed() {
    let html = std::fs::read_to_string(get_fixture_path("malformed_html.html")).unwrap();
    let text = extract_visible_text(&html);

    assert!(text.contains("Unclosed paragraph"));
    assert!(text.contains("cell one"));
    assert!(text.contains("cell two"));
    assert!(text.contains("Tail"));
}

#[test]
fn test_normalizer_idempotent_on_extracted_text() {
    for name in ["hidden_regions.html", "malformed_html.html", "root/1/index.html"] {
        let html = std::fs::read_to_string(get_fixture_path(name)).unwrap();
        let text = extract_visible_text(&html);
        assert_eq!(normalize_text(&text), text, "{name} not stable under normalization");
    }
}

#[test]
fn test_missing_root() {
    let result = Sightline::new().extract_root(get_fixture_path("no_such_root"));
    assert!(matches!(result, Err(SightlineError::RootNotFound(_))));
}

#[test]
fn test_discovery_api() {
    let units = discover_units(std::path::Path::new(&fixture_root())).unwrap();
    let numbers: Vec<_> = units.iter().map(|u| u.number).collect();
    assert_eq!(numbers, [1, 2, 3, 5, 12]);

    let first = units[0].files().unwrap();
    assert_eq!(first.len(), 1);
    assert!(first[0].path.ends_with("index.html"));
    assert_eq!(first[0].kind, SourceKind::Markup);

    let third = units[2].files().unwrap();
    assert_eq!(third[0].kind, SourceKind::PlainText);

    assert!(units[3].files().unwrap().is_empty());
}
