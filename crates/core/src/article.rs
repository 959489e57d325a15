//! Extraction result data model.
//!
//! This module defines [`ExtractionResult`], the structured record produced
//! by the Postlight Parser command line tool, along with the
//! [`ContentBundle`] that replaces its raw HTML content after transformation.
//!
//! The external tool emits more keys than this crate cares about
//! (`lead_image_url`, `excerpt`, `word_count`, ...); those are captured in a
//! flattened map so a JSON round trip preserves them unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The structured record produced by the external extractor or loaded from a
/// saved JSON result.
///
/// All known fields are optional at the type level; formatters that require
/// a field fail with [`crate::PerlegoError::MissingField`] when it is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Article title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Article author(s).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Publication timestamp as an ISO-8601 string
    /// (`YYYY-MM-DDTHH:MM:SS.ffffffZ`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,

    /// Source URL of the extracted page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Article content: raw HTML as emitted by the tool, or the three-way
    /// bundle after [`crate::transform::transform`] has run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,

    /// Every other key the tool emitted, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExtractionResult {
    /// The content bundle, if the result has been transformed.
    pub fn content_bundle(&self) -> Option<&ContentBundle> {
        match &self.content {
            Some(Content::Bundle(bundle)) => Some(bundle),
            _ => None,
        }
    }

    /// The raw HTML content, if the result has not been transformed yet.
    pub fn content_html(&self) -> Option<&str> {
        match &self.content {
            Some(Content::Html(html)) => Some(html),
            _ => None,
        }
    }
}

/// The `content` field of an extraction result.
///
/// Deserialization tries the bundle shape first so that re-loading a saved,
/// already-transformed result keeps its structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// Three-way rendering produced by the content transformer.
    Bundle(ContentBundle),
    /// Raw HTML string as emitted by the external tool.
    Html(String),
}

/// Parallel renderings derived from one source HTML string.
///
/// `markdown` and `text` are entity-decoded; `html` is the original input
/// exactly as the extractor produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBundle {
    /// Original HTML content.
    pub html: String,
    /// Markdown rendering (links, emphasis, and images preserved).
    pub markdown: String,
    /// Plain-text rendering (all markup stripped).
    pub text: String,
}
