mod common;

use common::fixtures::*;
use common::{TestResult, config, format_with, numbers, texts};
use folio::{FolioConfig, FolioError, FormatterBuilder, LayoutConfig, LayoutError, UnitRole};
use std::fs;
use tempfile::tempdir;

fn some(s: &str) -> Option<String> {
    Some(s.to_string())
}

#[test]
fn test_long_text_is_split_across_pages() -> TestResult {
    let doc = document(vec![block(vec![text("The quick brown fox")])]);
    let pages = format_with(config(8.0), &doc)?;

    assert_eq!(texts(&pages), vec![some("The quic"), some("k brown "), some("fox")]);
    assert_eq!(numbers(&pages), vec![1, 2, 3]);
    Ok(())
}

#[test]
fn test_nested_blocks_resume_mid_leaf() -> TestResult {
    let doc = document(vec![
        block(vec![text("aaaaa"), block(vec![text("bbbbb")])]),
        text("ccccc"),
    ]);
    let pages = format_with(config(8.0), &doc)?;

    let joined: String = pages.iter().map(|p| p.text()).collect();
    assert_eq!(joined, "aaaaabbbbbccccc");
    assert_eq!(pages[0].text(), "aaaaabbb");
    Ok(())
}

#[test]
fn test_columns_fill_before_the_next_page() -> TestResult {
    let mut cfg = config(4.0);
    cfg.layout.areas_per_page = 3;
    let pages = format_with(cfg, &document(vec![text("abcdefghijklmn")]))?;

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].area_texts(), vec!["abcd", "efgh", "ijkl"]);
    assert_eq!(pages[1].area_texts(), vec!["mn"]);
    Ok(())
}

#[test]
fn test_odd_page_break_produces_blank_even_page() -> TestResult {
    let doc = document(vec![
        text("intro"),
        block_breaking_before("odd-page", vec![text("chapter")]),
    ]);
    let pages = format_with(config(100.0), &doc)?;

    assert_eq!(texts(&pages), vec![some("intro"), None, some("chapter")]);
    assert_eq!(numbers(&pages), vec![1, 2, 3]);
    Ok(())
}

#[test]
fn test_blank_pages_can_be_suppressed() -> TestResult {
    let mut cfg = config(100.0);
    cfg.layout.emit_blank_pages = false;
    let doc = document(vec![text("intro"), page_break("odd-page"), text("chapter")]);
    let pages = format_with(cfg, &doc)?;

    assert_eq!(texts(&pages), vec![some("intro"), some("chapter")]);
    assert_eq!(numbers(&pages), vec![1, 3]);
    Ok(())
}

#[test]
fn test_document_of_only_a_break_has_one_page() -> TestResult {
    let pages = format_with(config(100.0), &document(vec![page_break("even-page")]))?;

    assert_eq!(texts(&pages), vec![some("")]);
    assert_eq!(numbers(&pages), vec![1]);
    Ok(())
}

#[test]
fn test_layout_config_replaces_only_page_geometry() -> TestResult {
    let mut cfg = config(100.0);
    cfg.uniform_extent = 2.0;
    let formatter = FormatterBuilder::new()
        .with_config(cfg)
        .with_layout_config(LayoutConfig {
            area_extent: 4.0,
            first_page_number: 5,
            ..Default::default()
        })
        .build()?;
    let pages = formatter.format_json(&serde_json::to_string(&document(vec![text("abcde")]))?)?;

    // Two points per character from the kept uniform extent.
    assert_eq!(texts(&pages), vec![some("ab"), some("cd"), some("e")]);
    assert_eq!(numbers(&pages), vec![5, 6, 7]);
    assert_eq!(formatter.config().uniform_extent, 2.0);
    Ok(())
}

#[test]
fn test_form_feed_in_text_breaks_the_page() -> TestResult {
    let pages = format_with(config(100.0), &document(vec![text("first\u{000C}second")]))?;

    assert_eq!(texts(&pages), vec![some("first"), some("second")]);
    Ok(())
}

#[test]
fn test_list_items_and_table_cells_tag_their_content() -> TestResult {
    let doc = document(vec![
        list_item(vec![text("1.")], vec![text("Item")], 24.0, 6.0),
        table_cell(vec![text("cell")], 100.0, 80.0),
    ]);
    let pages = format_with(config(100.0), &doc)?;
    let units = &pages[0].areas[0];

    let label = &units[0].unit;
    assert_eq!(label.role, UnitRole::Label);
    assert_eq!(label.span.width, Some(18.0));

    let body = &units[2].unit;
    assert_eq!(body.role, UnitRole::ListBody);
    assert_eq!(body.span.start, 24.0);

    let cell = &units[6].unit;
    assert_eq!(cell.glyph, Some('c'));
    assert_eq!(cell.role, UnitRole::TableCell);
    assert_eq!((cell.span.start, cell.span.width), (100.0, Some(80.0)));
    Ok(())
}

#[test]
fn test_label_wider_than_its_item_is_malformed() {
    let doc = document(vec![list_item(vec![text("1.")], vec![], 4.0, 6.0)]);
    let err = format_with(config(100.0), &doc).unwrap_err();

    assert!(matches!(err, FolioError::Layout(LayoutError::MalformedNode { .. })));
    assert!(err.node().is_some());
}

#[test]
fn test_oversized_unit_aborts_the_document() {
    let mut cfg = config(10.0);
    cfg.uniform_extent = 11.0;
    let err = format_with(cfg, &document(vec![block(vec![text("x")])])).unwrap_err();

    assert!(matches!(err, FolioError::Layout(LayoutError::Unplaceable { .. })));
    assert_eq!(err.node().map(|n| n.get()), Some(2));
}

#[test]
fn test_page_limit_is_enforced() {
    let mut cfg = config(1.0);
    cfg.layout.max_pages = 3;
    let err = format_with(cfg, &document(vec![text("abcdef")])).unwrap_err();

    assert!(matches!(err, FolioError::Layout(LayoutError::PageLimitExceeded(3))));
}

#[test]
fn test_invalid_document_json_is_reported() -> TestResult {
    let formatter = FormatterBuilder::new().with_config(config(10.0)).build()?;

    let err = formatter.format_json(r#"{ "content": [{ "type": "Paragraph" }] }"#).unwrap_err();
    assert!(matches!(err, FolioError::Document(_)));
    Ok(())
}

#[test]
fn test_invalid_layout_config_is_rejected_at_build() {
    let cfg = FolioConfig {
        layout: LayoutConfig {
            areas_per_page: 0,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(matches!(FormatterBuilder::new().with_config(cfg).build(), Err(FolioError::Config(_))));
}

#[test]
fn test_documents_and_config_load_from_files() -> TestResult {
    let dir = tempdir()?;
    let doc_path = dir.path().join("doc.json");
    let config_path = dir.path().join("config.json");
    fs::write(&doc_path, serde_json::to_string(&document(vec![text("abcdef")]))?)?;
    fs::write(&config_path, r#"{ "areaExtent": 4, "uniformExtent": 1, "firstPageNumber": 7 }"#)?;

    let formatter = FormatterBuilder::new().with_config_file(&config_path)?.build()?;
    let pages = formatter.format_file(&doc_path)?;

    assert_eq!(texts(&pages), vec![some("abcd"), some("ef")]);
    assert_eq!(numbers(&pages), vec![7, 8]);
    Ok(())
}

#[test]
fn test_missing_document_file_is_io_error() -> TestResult {
    let dir = tempdir()?;
    let formatter = FormatterBuilder::new().build()?;

    let err = formatter.format_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, FolioError::Io(_)));
    Ok(())
}

#[test]
fn test_tree_can_be_paginated_twice() -> TestResult {
    let formatter = FormatterBuilder::new().with_config(config(3.0)).build()?;
    let doc = folio::Document::from_json(&serde_json::to_string(&document(vec![
        text("abc"),
        page_break("even-page"),
        text("defg"),
    ]))?)?;

    let mut tree = formatter.assemble(&doc)?;
    let first = formatter.engine().paginate_all(&mut tree)?;
    tree.reset_markers();
    let second = formatter.engine().paginate_all(&mut tree)?;

    assert_eq!(first, second);
    assert_eq!(texts(&first), vec![some("abc"), some("def"), some("g")]);
    Ok(())
}
