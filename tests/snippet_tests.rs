//! Snippet insertion feeding the renderer.

use livemark::snippet::PLACEHOLDER;
use livemark::{append_syntax, insert_syntax, to_html, SyntaxRule, CATALOG};

fn rule(label: &str) -> &'static SyntaxRule {
    SyntaxRule::find(label).unwrap()
}

#[test]
fn catalog_has_every_toolbar_button() {
    assert_eq!(CATALOG.len(), 20);
    for label in ["H1", "H4", "B", "I", "S", "U", "==", "code", "```", "link", "image", "table"] {
        assert!(SyntaxRule::find(label).is_some(), "missing {label}");
    }
}

#[test]
fn wrapping_rules_have_closing() {
    for rule in CATALOG.iter().filter(|r| r.wraps_selection) {
        assert!(!rule.closing().is_empty(), "{} has no closing", rule.label);
    }
}

#[test]
fn cursor_after_opening_delimiter() {
    let out = insert_syntax(rule("U"), "", 0..0);
    assert_eq!(out.text, format!("<u>{PLACEHOLDER}</u>"));
    assert_eq!(out.cursor, "<u>".len());
}

#[test]
fn cursor_after_inserted_text() {
    let out = insert_syntax(rule("table"), "x", 1..1);
    assert_eq!(out.cursor, out.text.len());
}

#[test]
fn bold_snippet_renders_bold() {
    let out = insert_syntax(rule("B"), "make this loud", 10..14);
    assert_eq!(to_html(&out.text), "make this <strong>loud</strong>");
}

#[test]
fn every_wrapping_snippet_renders_something() {
    // Each wrapping template around the placeholder produces markup
    for rule in CATALOG.iter().filter(|r| r.wraps_selection) {
        let text = append_syntax(rule, "");
        let html = to_html(&text);
        assert!(html.contains('<'), "{} rendered as {html:?}", rule.label);
    }
}

#[test]
fn heading_snippets_render_headings() {
    for level in 1..=4 {
        let label = format!("H{level}");
        let text = append_syntax(rule(&label), "") + "Title";
        assert_eq!(to_html(&text), format!("<h{level}>Title</h{level}>"));
    }
}

#[test]
fn table_snippet_renders_one_table() {
    let html = to_html(&append_syntax(rule("table"), ""));
    assert_eq!(html.matches("<table>").count(), 1);
    assert_eq!(html.matches("<tr>").count(), 2);
}
