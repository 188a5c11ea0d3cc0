//! Fenced code blocks.

use livemark::{to_html, to_html_with_options, Options};

#[test]
fn fenced_markup_stays_literal() {
    assert_eq!(
        to_html("```\n**not bold**\n# not heading\n- not item\n```"),
        "<pre><code>**not bold**\n# not heading\n- not item\n</code></pre>"
    );
}

#[test]
fn fenced_html_is_escaped() {
    assert_eq!(
        to_html("```\n<script>x</script>\n```"),
        "<pre><code>&lt;script&gt;x&lt;/script&gt;\n</code></pre>"
    );
}

#[test]
fn raw_tags_not_readmitted_in_code() {
    assert_eq!(
        to_html("```\n<u>x</u>\n```"),
        "<pre><code>&lt;u&gt;x&lt;/u&gt;\n</code></pre>"
    );
}

#[test]
fn unterminated_fence_runs_to_end() {
    assert_eq!(
        to_html("```\nlet a;\n**b**\n"),
        "<pre><code>let a;\n**b**\n</code></pre>"
    );
}

#[test]
fn empty_fence() {
    assert_eq!(to_html("```\n```"), "<pre><code></code></pre>");
}

#[test]
fn blank_lines_inside_fence() {
    assert_eq!(to_html("```\na\n\nb\n```"), "<pre><code>a\n\nb\n</code></pre>");
}

#[test]
fn longer_closing_fence() {
    assert_eq!(to_html("```\nx\n`````\ny"), "<pre><code>x\n</code></pre><br />y");
}

#[test]
fn text_after_closing_backticks_does_not_close() {
    assert_eq!(
        to_html("```\n``` no\n```"),
        "<pre><code>``` no\n</code></pre>"
    );
}

#[test]
fn info_string_ignored_by_default() {
    assert_eq!(to_html("```rust\nx\n```"), "<pre><code>x\n</code></pre>");
}

#[test]
fn info_string_as_language_class() {
    let options = Options {
        language_class: true,
        ..Options::default()
    };
    assert_eq!(
        to_html_with_options("``` rust \nx\n```", &options),
        "<pre><code class=\"language-rust\">x\n</code></pre>"
    );
}

#[test]
fn info_string_quotes_escaped() {
    let options = Options {
        language_class: true,
        ..Options::default()
    };
    let html = to_html_with_options("```a\"b\nx\n```", &options);
    assert!(html.starts_with("<pre><code class=\"language-a&quot;b\">"));
}

#[test]
fn crlf_inside_fence() {
    assert_eq!(to_html("```\r\na\r\n```\r\n"), "<pre><code>a\n</code></pre><br />");
}
