//! Markdown rendering for summary drafts.
//!
//! Summaries come back from the provider (and from the caller's edits) as
//! lightweight markup; the mail body wants an HTML fragment. Rendering is
//! a pure function with no error path: malformed markup degrades to
//! literal text.

use pulldown_cmark::{Event, Options, Parser, html};

/// Convert a markdown summary into a safe HTML fragment.
///
/// Raw HTML blocks and inline HTML in the input are downgraded to text
/// events, so they are escaped in the output and embedded scripts never
/// survive. The result is a fragment for structured insertion, not a full
/// document. Deterministic: identical input always yields identical
/// output.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut output = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut output, parser);
    output
}
