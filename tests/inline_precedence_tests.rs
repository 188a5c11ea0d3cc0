//! Inline rule precedence.

use livemark::to_html;

#[test]
fn triple_star_is_one_combined_span() {
    assert_eq!(
        to_html("***bold-italic***"),
        "<strong><em>bold-italic</em></strong>"
    );
}

#[test]
fn bold_before_italic() {
    assert_eq!(to_html("**a** *b*"), "<strong>a</strong> <em>b</em>");
}

#[test]
fn italic_nested_in_bold() {
    assert_eq!(
        to_html("**a *b* c**"),
        "<strong>a <em>b</em> c</strong>"
    );
}

#[test]
fn strike_and_highlight_nest_in_emphasis() {
    assert_eq!(
        to_html("*~~a~~ ==b==*"),
        "<em><del>a</del> <mark>b</mark></em>"
    );
}

#[test]
fn code_span_is_verbatim() {
    assert_eq!(to_html("`**x** [a](b)`"), "<code>**x** [a](b)</code>");
}

#[test]
fn code_span_content_is_escaped() {
    assert_eq!(to_html("`<u>x</u>`"), "<code>&lt;u&gt;x&lt;/u&gt;</code>");
}

#[test]
fn image_wins_over_link() {
    assert_eq!(
        to_html("![alt](img.png)"),
        "<img src=\"img.png\" alt=\"alt\" />"
    );
}

#[test]
fn image_alt_is_plain_text() {
    assert_eq!(
        to_html("![a *b*](i.png)"),
        "<img src=\"i.png\" alt=\"a b\" />"
    );
}

#[test]
fn link_text_may_hold_emphasis() {
    assert_eq!(
        to_html("[**go**](/x)"),
        "<a href=\"/x\"><strong>go</strong></a>"
    );
}

#[test]
fn link_wrapping_image() {
    assert_eq!(
        to_html("[![logo](l.png)](/)"),
        "<a href=\"/\"><img src=\"l.png\" alt=\"logo\" /></a>"
    );
}

#[test]
fn raw_tags_nest_inside_emphasis() {
    assert_eq!(to_html("**E=mc<sup>2</sup>**"), "<strong>E=mc<sup>2</sup></strong>");
}

#[test]
fn raw_tag_names_are_case_sensitive() {
    assert_eq!(to_html("<U>x</U>"), "&lt;U&gt;x&lt;/U&gt;");
}

#[test]
fn mismatched_raw_tags_stay_escaped() {
    assert_eq!(to_html("<u>x</sub>"), "&lt;u&gt;x&lt;/sub&gt;");
}

#[test]
fn empty_delimiters_stay_literal() {
    assert_eq!(to_html("~~~~ ===="), "~~~~ ====");
    assert_eq!(to_html("``"), "``");
}

#[test]
fn spans_never_cross_earlier_spans() {
    // The tildes straddle the bold span
    let html = to_html("~~a **b~~ c**");
    assert_eq!(html, "~~a <strong>b~~ c</strong>");
}

#[test]
fn heading_content_is_inline_parsed() {
    assert_eq!(to_html("## *Title*"), "<h2><em>Title</em></h2>");
}
