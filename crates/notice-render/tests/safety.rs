//! Injection safety of the markdown renderer.
//!
//! Whatever the input, the only tags in the output are the ones the
//! restricted subset produces, and anchors only carry allowed schemes.

use notice_render::{escape_html, renderer_for, ContentRenderer, LinkPolicy, MarkdownRenderer, RenderLevel};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const ALLOWED_TAGS: &[&str] = &[
    "<strong>", "</strong>", "<em>", "</em>", "<code>", "</code>", "<h4>", "</h4>", "<h5>",
    "</h5>", "<ul>", "</ul>", "<li>", "</li>", "<br>", "<a href=\"", "</a>",
];

fn only_allowed_tags(html: &str) -> bool {
    html.match_indices('<')
        .all(|(i, _)| ALLOWED_TAGS.iter().any(|tag| html[i..].starts_with(tag)))
}

#[test]
fn script_tag_is_inert() {
    let renderer = MarkdownRenderer::default();
    let html = renderer.render("<script>alert(1)</script>");
    assert!(!html.contains("<script"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn raw_html_inside_markdown_is_escaped() {
    let renderer = MarkdownRenderer::default();
    assert_eq!(
        renderer.render("**<img src=x onerror=alert(1)>**"),
        "<strong>&lt;img src=x onerror=alert(1)&gt;</strong>"
    );
}

#[test]
fn mixed_announcement() {
    let renderer = renderer_for(RenderLevel::RestrictedMarkdown, LinkPolicy::default());
    let message = "## Simchas Torah\n\
                   Services are **earlier** this week.  \n\
                   - Shacharis `8:00`\n\
                   - Mincha *5:45*\n\
                   \n\
                   Details [here](https://example.org/yomtov).";
    assert_eq!(
        renderer.render(message),
        "<h4>Simchas Torah</h4> Services are <strong>earlier</strong> this week.<br>\
         <ul><li>Shacharis <code>8:00</code></li><li>Mincha <em>5:45</em></li></ul> \
         Details <a href=\"https://example.org/yomtov\" target=\"_blank\" \
         rel=\"noopener noreferrer\">here</a>."
    );
}

proptest! {
    #[test]
    fn prop_output_has_only_subset_tags(input in "[ -~\\n]{0,80}") {
        let html = MarkdownRenderer::default().render(&input);
        prop_assert!(only_allowed_tags(&html), "unexpected tag in {:?}", html);
        for (i, _) in html.match_indices("<a href=\"") {
            let value = &html[i + 9..];
            let href = &value[..value.find('"').unwrap_or(value.len())];
            prop_assert!(LinkPolicy::default().allows(href), "anchor with {:?}", href);
        }
    }

    #[test]
    fn prop_plain_text_is_just_escaped(input in "[a-zA-Z0-9 .,:;!?<>&'\"]{0,60}") {
        let html = MarkdownRenderer::default().render(&input);
        prop_assert_eq!(html, escape_html(&input));
    }

    #[test]
    fn prop_disallowed_links_never_anchor(label in "[a-z]{1,10}", body in "[a-z0-9]{1,10}") {
        let html = MarkdownRenderer::default().render(&format!("[{label}](javascript:{body})"));
        prop_assert!(!html.contains("<a "));
        prop_assert_eq!(html, label);
    }
}
