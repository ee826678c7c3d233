//! End-to-end tests for icon rendering and output

use cw_icon::{generate_to_file, render, render_document, Code, IconConfig, IconError};
use pretty_assertions::assert_eq;

fn symbol_count(config: &IconConfig) -> usize {
    config.codes.iter().map(Code::len).sum()
}

#[test]
fn test_document_without_background() {
    let config = IconConfig::default();
    let doc = render_document(&config, false);
    let root = doc.root();

    assert_eq!(root.attribute("width"), Some("512"));
    assert_eq!(root.attribute("height"), Some("512"));
    assert_eq!(root.attribute("viewBox"), Some("0 0 512 512"));

    assert_eq!(doc.count("rect"), 0);
    assert_eq!(doc.count("circle"), 5);
    assert_eq!(doc.count("line"), config.codes.len());
    assert_eq!(doc.count("path"), symbol_count(&config));
    assert_eq!(
        root.children().len(),
        5 + config.codes.len() + symbol_count(&config)
    );
}

#[test]
fn test_default_codes_element_counts() {
    // -.-  --...  --..  ..-.  -.-.
    let doc = render_document(&IconConfig::default(), false);
    assert_eq!(doc.count("line"), 5);
    assert_eq!(doc.count("path"), 3 + 5 + 4 + 4 + 4);
}

#[test]
fn test_document_with_background() {
    let config = IconConfig::default();
    let plain = render_document(&config, false);
    let doc = render_document(&config, true);

    assert_eq!(doc.count("rect"), 1);
    let first = &doc.root().children()[0];
    assert_eq!(first.name(), "rect");
    assert_eq!(first.attribute("x"), Some("0"));
    assert_eq!(first.attribute("y"), Some("0"));
    assert_eq!(first.attribute("width"), Some("512"));
    assert_eq!(first.attribute("height"), Some("512"));
    assert_eq!(first.attribute("fill"), Some("white"));

    // Everything after the backdrop matches the plain rendering
    assert_eq!(&doc.root().children()[1..], plain.root().children());
}

#[test]
fn test_namespaces_declared() {
    let svg = render(&IconConfig::default(), false);
    assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
    assert!(svg.contains(r#"xmlns:xlink="http://www.w3.org/1999/xlink""#));
}

#[test]
fn test_element_order() {
    let doc = render_document(&IconConfig::default(), false);
    let names: Vec<&str> = doc.root().children().iter().map(|e| e.name()).collect();

    // First code "-.-" draws three wedges then its divider
    assert_eq!(&names[..4], &["path", "path", "path", "line"]);
    assert_eq!(&names[names.len() - 5..], &["circle"; 5]);
}

#[test]
fn test_render_is_deterministic() {
    let config = IconConfig::default();
    assert_eq!(render(&config, false), render(&config, false));
    assert_eq!(render(&config, true), render(&config, true));
}

#[test]
fn test_custom_codes_from_toml() {
    let config = IconConfig::from_toml(
        r#"
        codes = ["...", "---", "...", "-"]

        [canvas]
        size = 256
        "#,
    )
    .unwrap();
    let doc = render_document(&config, false);

    assert_eq!(doc.root().attribute("viewBox"), Some("0 0 256 256"));
    assert_eq!(doc.count("line"), 4);
    assert_eq!(doc.count("path"), 10);
}

#[test]
fn test_generate_writes_rendered_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assets").join("cw_icon.svg");
    let config = IconConfig::default();

    generate_to_file(&config, true, &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render(&config, true));

    // Regenerating produces identical bytes
    generate_to_file(&config, true, &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), written);
}

#[test]
fn test_generate_reports_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("assets");
    std::fs::write(&blocker, "not a directory").unwrap();

    let result = generate_to_file(&IconConfig::default(), false, &blocker.join("cw_icon.svg"));
    assert!(matches!(result, Err(IconError::Io { .. })));
    assert_eq!(std::fs::read_to_string(&blocker).unwrap(), "not a directory");
}
