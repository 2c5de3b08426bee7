//! Markdown rendering
//!
//! A fixed pipeline of text substitutions, not a block parser. Each step
//! rewrites the output of the previous one, so the order is part of the
//! contract: code fences before inline code (otherwise the inline pass
//! would eat the triple backticks), headers and list items while line
//! boundaries still exist, paragraph/linebreak rewriting last. Headers
//! and lists therefore
//! end up nested inside `<p>` and separated by literal `<br>`; that output
//! shape is intentional and callers' stylesheets expect it.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FENCED_CODE: Regex = Regex::new(r"(?s)```(\w+)?\n(.*?)\n```").unwrap();
    static ref INLINE_CODE: Regex = Regex::new(r"`([^`]+)`").unwrap();
    static ref H3: Regex = Regex::new(r"(?m)^### (.*?)$").unwrap();
    static ref H2: Regex = Regex::new(r"(?m)^## (.*?)$").unwrap();
    static ref H1: Regex = Regex::new(r"(?m)^# (.*?)$").unwrap();
    static ref LIST_ITEM: Regex = Regex::new(r"(?m)^- (.*?)$").unwrap();
    // Greedy on purpose: one <ul> spans from the first <li> to the last.
    static ref LIST_RUN: Regex = Regex::new(r"(?s)(<li>.*</li>)").unwrap();
}

/// Render a markdown body to an HTML string.
///
/// Deterministic: the same input always produces byte-identical output.
pub fn render(markdown: &str) -> String {
    let html = fenced_code_blocks(markdown);
    let html = inline_code(&html);
    let html = headers(&html);
    let html = list_items(&html);
    paragraphs(&html)
}

/// ```` ```lang ... ``` ```` blocks, shortest match first. A missing
/// language tag leaves the class as a bare `language-`.
fn fenced_code_blocks(text: &str) -> String {
    FENCED_CODE
        .replace_all(
            text,
            "<pre><code class=\"language-${1}\">${2}</code></pre>",
        )
        .into_owned()
}

/// Single-backtick spans with no embedded backtick
fn inline_code(text: &str) -> String {
    INLINE_CODE.replace_all(text, "<code>${1}</code>").into_owned()
}

/// Hash headers, most specific prefix first so `###` never matches `#`
fn headers(text: &str) -> String {
    let text = H3.replace_all(text, "<h3>${1}</h3>");
    let text = H2.replace_all(&text, "<h2>${1}</h2>");
    H1.replace_all(&text, "<h1>${1}</h1>").into_owned()
}

/// `- ` lines become `<li>`, then the whole first-to-last run is wrapped
/// in a single `<ul>`, intervening text included.
fn list_items(text: &str) -> String {
    let text = LIST_ITEM.replace_all(text, "<li>${1}</li>");
    LIST_RUN.replace_all(&text, "<ul>${1}</ul>").into_owned()
}

/// Blank lines become paragraph boundaries, remaining newlines become
/// `<br>`, and the whole body gets one outer `<p>` wrapper.
fn paragraphs(text: &str) -> String {
    let text = text.replace("\n\n", "</p><p>").replace('\n', "<br>");
    format!("<p>{}</p>", text)
}
