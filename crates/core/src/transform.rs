//! Content transformation.
//!
//! Replaces an extraction result's raw HTML content with a
//! [`ContentBundle`] holding three parallel renderings: the original HTML,
//! a Markdown conversion (links, emphasis, and images preserved), and a
//! plain-text conversion (all markup stripped). Both derived renderings are
//! entity-decoded and optionally word-wrapped at a caller-supplied width.

use scraper::node::Node;
use scraper::{ElementRef, Html};

use crate::article::{Content, ContentBundle, ExtractionResult};
use crate::entities::unescape;
use crate::{PerlegoError, Result};

const BLOCK_ELEMENTS: [&str; 15] = [
    "p",
    "div",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "li",
    "blockquote",
    "pre",
    "td",
    "th",
    "ul",
    "ol",
];

const SKIPPED_ELEMENTS: [&str; 4] = ["script", "style", "head", "noscript"];

/// Replace `content` with a [`ContentBundle`] derived from its HTML.
///
/// `body_width` wraps output lines at the given column; `None` leaves both
/// renderings unwrapped. An already-transformed result is returned
/// unchanged.
///
/// # Errors
///
/// [`PerlegoError::MissingContent`] when the result carries no content
/// field; [`PerlegoError::HtmlConvertError`] when Markdown conversion fails.
pub fn transform(mut result: ExtractionResult, body_width: Option<usize>) -> Result<ExtractionResult> {
    let html = match result.content.take() {
        Some(Content::Html(html)) => html,
        Some(bundle @ Content::Bundle(_)) => {
            result.content = Some(bundle);
            return Ok(result);
        }
        None => return Err(PerlegoError::MissingContent),
    };

    let markdown = finish(html_to_markdown(&html)?, body_width);
    let text = finish(html_to_text(&html), body_width);

    result.content = Some(Content::Bundle(ContentBundle { html, markdown, text }));
    Ok(result)
}

/// Entity-decode converted output, then apply the wrapping rule.
fn finish(converted: String, body_width: Option<usize>) -> String {
    let decoded = unescape(&converted);
    match body_width {
        Some(width) if width > 0 => wrap(&decoded, width),
        _ => decoded,
    }
}

/// Convert HTML to Markdown using the htmd crate.
fn html_to_markdown(html: &str) -> Result<String> {
    htmd::convert(html)
        .map(|markdown| markdown.trim().to_string())
        .map_err(|e| PerlegoError::HtmlConvertError(e.to_string()))
}

/// Convert HTML to plain text, stripping all markup.
///
/// Block elements become paragraph breaks, `<br>` becomes a line break, and
/// runs of whitespace collapse to single spaces. Character references in the
/// source markup are resolved by the HTML parser.
fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut output = String::new();
    walk(document.root_element(), &mut output);
    output.trim().to_string()
}

fn walk(element: ElementRef, output: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => append_words(output, text),
            Node::Element(el) => {
                let name = el.name();
                if SKIPPED_ELEMENTS.contains(&name) {
                    continue;
                }
                if name == "br" {
                    break_line(output);
                    continue;
                }

                let Some(child_ref) = ElementRef::wrap(child) else {
                    continue;
                };
                if BLOCK_ELEMENTS.contains(&name) {
                    break_paragraph(output);
                    walk(child_ref, output);
                    break_paragraph(output);
                } else {
                    walk(child_ref, output);
                }
            }
            _ => {}
        }
    }
}

fn append_words(output: &mut String, text: &str) {
    for word in text.split_whitespace() {
        if !output.is_empty() && !output.ends_with(['\n', ' ']) {
            output.push(' ');
        }
        output.push_str(word);
    }
}

fn break_line(output: &mut String) {
    while output.ends_with(' ') {
        output.pop();
    }
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
}

fn break_paragraph(output: &mut String) {
    while output.ends_with([' ', '\n']) {
        output.pop();
    }
    if !output.is_empty() {
        output.push_str("\n\n");
    }
}

/// Word-wrap each line of `text` at `width` columns.
///
/// Blank lines (paragraph separators) are preserved; a single token longer
/// than `width` stays on its own line unbroken.
fn wrap(text: &str, width: usize) -> String {
    text.lines()
        .map(|line| {
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.is_empty() { String::new() } else { wrap_words(&words, width) }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap a slice of words to the given width.
fn wrap_words(words: &[&str], width: usize) -> String {
    let mut lines = Vec::new();
    let mut current_line = Vec::new();
    let mut current_length = 0;

    for &word in words {
        let word_len = word.chars().count();

        if current_length == 0 {
            current_line.push(word);
            current_length = word_len;
        } else if current_length + 1 + word_len <= width {
            current_length += 1 + word_len;
            current_line.push(word);
        } else {
            lines.push(current_line.join(" "));
            current_line = vec![word];
            current_length = word_len;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line.join(" "));
    }

    lines.join("\n")
}
