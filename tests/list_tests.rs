//! List rendering, flat by default and grouped on request.

use livemark::{to_html, to_html_with_options, Options};

fn grouped(input: &str) -> String {
    let options = Options {
        group_lists: true,
        ..Options::default()
    };
    to_html_with_options(input, &options)
}

#[test]
fn flat_items_are_standalone() {
    assert_eq!(
        to_html("- a\n1. b"),
        "<li class=\"unordered\">a</li><br /><li class=\"ordered\">b</li>"
    );
}

#[test]
fn dash_without_space_is_text() {
    assert_eq!(to_html("-a"), "-a");
}

#[test]
fn ordered_needs_dot_and_space() {
    assert_eq!(to_html("1) a"), "1) a");
    assert_eq!(to_html("1.a"), "1.a");
}

#[test]
fn grouped_unordered() {
    assert_eq!(grouped("- a\n- b\n- c"), "<ul><li>a</li><li>b</li><li>c</li></ul>");
}

#[test]
fn grouped_ordered_keeps_start() {
    assert_eq!(grouped("7. a\n8. b"), "<ol start=\"7\"><li>a</li><li>b</li></ol>");
}

#[test]
fn grouped_list_before_trailing_newline() {
    assert_eq!(grouped("- a\n"), "<ul><li>a</li></ul><br />");
}

#[test]
fn grouped_list_interrupted_by_heading() {
    assert_eq!(
        grouped("- a\n# H\n- b"),
        "<ul><li>a</li></ul><br /><h1>H</h1><br /><ul><li>b</li></ul>"
    );
}

#[test]
fn tasks_do_not_join_grouped_lists() {
    let html = grouped("- a\n- [x] b");
    assert!(html.starts_with("<ul><li>a</li></ul><br /><div class=\"task checked\">"));
}

#[test]
fn items_are_inline_parsed() {
    assert_eq!(
        to_html("- **bold** item"),
        "<li class=\"unordered\"><strong>bold</strong> item</li>"
    );
}
