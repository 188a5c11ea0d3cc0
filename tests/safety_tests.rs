//! Injection safety and never-fail properties.

use std::sync::LazyLock;

use html_escape::decode_html_entities;
use livemark::{to_html, to_html_with_options, Options};
use proptest::prelude::*;
use regex::Regex;

/// Every tag the renderer is allowed to emit, attributes included.
static ALLOWED_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"<(?:"#,
        r#"br /|hr /"#,
        r#"|/?(?:h[1-4]|blockquote|li|ul|ol|div|span|del|table|tr|td|pre|code|strong|em|mark|u|sup|sub|a)"#,
        r#"|li class="(?:un)?ordered""#,
        r#"|ol start="\d+""#,
        r#"|div class="task(?: checked)?""#,
        r#"|span class="task-marker""#,
        r#"|code class="language-[^"<>]*""#,
        r#"|a href="[^"<>]*""#,
        r#"|img src="[^"<>]*" alt="[^"<>]*" /"#,
        r#")>"#
    ))
    .unwrap()
});

/// Assert that nothing but allowlisted tags carries a raw `<` or `>`.
fn assert_only_allowed_tags(input: &str, html: &str) {
    let residue = ALLOWED_TAG_RE.replace_all(html, "");
    assert!(
        !residue.contains('<') && !residue.contains('>'),
        "unexpected markup for {input:?}: {html:?}"
    );
}

fn all_options() -> [Options; 2] {
    [
        Options::default(),
        Options {
            raw_tags: true,
            group_lists: true,
            language_class: true,
        },
    ]
}

/// Inputs built from markup fragments, far more likely to hit real
/// constructs than random strings.
fn markup_soup() -> impl Strategy<Value = String> {
    let pieces = prop_oneof![
        Just("**"),
        Just("*"),
        Just("~~"),
        Just("=="),
        Just("`"),
        Just("```"),
        Just("["),
        Just("]"),
        Just("("),
        Just(")"),
        Just("!"),
        Just("\""),
        Just("'"),
        Just("<u>"),
        Just("</u>"),
        Just("<sup>"),
        Just("</sub>"),
        Just("<script>"),
        Just("<img onerror=x>"),
        Just("&amp;"),
        Just("|"),
        Just("| "),
        Just("# "),
        Just("#### "),
        Just("- "),
        Just("- [x] "),
        Just("1. "),
        Just("> "),
        Just("---"),
        Just("\n"),
        Just("\r\n"),
        Just(" "),
        Just("a"),
        Just("é"),
        Just("漢"),
    ];
    prop::collection::vec(pieces, 0..48).prop_map(|v| v.concat())
}

proptest! {
    #[test]
    fn prop_arbitrary_input_never_injects(input in "\\PC{0,200}") {
        for options in all_options() {
            let html = to_html_with_options(&input, &options);
            assert_only_allowed_tags(&input, &html);
        }
    }

    #[test]
    fn prop_markup_soup_never_injects(input in markup_soup()) {
        for options in all_options() {
            let html = to_html_with_options(&input, &options);
            assert_only_allowed_tags(&input, &html);
        }
    }

    #[test]
    fn prop_breaks_never_exceed_newlines(input in markup_soup()) {
        let html = to_html(&input);
        let newlines = input.matches('\n').count();
        prop_assert!(html.matches("<br />").count() <= newlines);
    }

    #[test]
    fn prop_plain_text_round_trips(body in "[a-zA-Z0-9 ,.;:'\"?&<>]{0,60}") {
        // Leading letter keeps the line clear of block markers
        let input = format!("x{body}");
        let html = to_html(&input);
        let decoded = decode_html_entities(&html);
        prop_assert_eq!(decoded.as_ref(), input.as_str());
    }

    #[test]
    fn prop_buffer_reuse_matches_fresh_render(a in markup_soup(), b in markup_soup()) {
        let mut buffer = String::new();
        livemark::to_html_into(&a, &mut buffer);
        livemark::to_html_into(&b, &mut buffer);
        prop_assert_eq!(buffer, to_html(&b));
    }
}

#[test]
fn script_tag_is_escaped() {
    let html = to_html("<script>alert(1)</script>");
    assert_eq!(html, "&lt;script&gt;alert(1)&lt;/script&gt;");
}

#[test]
fn event_handler_attribute_is_escaped() {
    let html = to_html("<img src=x onerror=alert(1)>");
    assert_eq!(html, "&lt;img src=x onerror=alert(1)&gt;");
}

#[test]
fn link_target_cannot_break_attribute() {
    let html = to_html("[x](a\" onmouseover=\"alert(1))");
    assert_eq!(
        html,
        "<a href=\"a&quot; onmouseover=&quot;alert(1\">x</a>)"
    );
}

#[test]
fn image_alt_cannot_break_attribute() {
    let html = to_html("![\" onload=\"x](p.png)");
    assert_eq!(
        html,
        "<img src=\"p.png\" alt=\"&quot; onload=&quot;x\" />"
    );
}

#[test]
fn raw_tag_attributes_are_not_allowed() {
    let html = to_html("<u onclick=x>a</u>");
    assert_eq!(html, "&lt;u onclick=x&gt;a&lt;/u&gt;");
}

#[test]
fn entities_in_input_are_double_escaped() {
    assert_eq!(to_html("&lt;u&gt;"), "&amp;lt;u&amp;gt;");
}
