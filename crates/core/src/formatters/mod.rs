//! Format registry and built-in formatters.
//!
//! A formatter is a function taking a (transformed) [`ExtractionResult`] and
//! returning one final output string. Formatters live in a process-wide
//! [`Registry`] keyed by format name; the table is built once behind a
//! `LazyLock` and is read-only afterward.
//!
//! Registration derives the key from the function name by stripping the
//! conventional `_format` suffix, so `json_format` is looked up as `json`.

pub mod json;
pub mod markdown;
pub mod text;

pub use json::json_format;
pub use markdown::markdown_format;
pub use text::text_format;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::article::ExtractionResult;
use crate::{PerlegoError, Result};

/// A rendering function: extraction result in, final output string out.
pub type FormatFn = fn(&ExtractionResult) -> Result<String>;

/// Mapping from format name to rendering function.
pub struct Registry {
    entries: BTreeMap<String, FormatFn>,
}

macro_rules! register {
    ($registry:expr, $($formatter:ident),+ $(,)?) => {
        $( $registry.register(stringify!($formatter), $formatter); )+
    };
}

impl Registry {
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Register `f` under the key derived from `function_name`: everything
    /// before the final `_` segment. Re-registering a key silently replaces
    /// the earlier entry.
    pub fn register(&mut self, function_name: &str, f: FormatFn) {
        let key = function_name.rsplit_once('_').map_or(function_name, |(head, _)| head);
        self.entries.insert(key.to_string(), f);
    }

    /// Look up a formatter by name.
    ///
    /// # Errors
    ///
    /// [`PerlegoError::UnknownFormat`] listing the known names.
    pub fn get(&self, name: &str) -> Result<FormatFn> {
        self.entries.get(name).copied().ok_or_else(|| PerlegoError::UnknownFormat {
            name: name.to_string(),
            known: self.names().join(", "),
        })
    }

    /// Registered format names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    fn builtin() -> Self {
        let mut registry = Self::new();
        register!(registry, json_format, markdown_format, text_format);
        registry
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::builtin);

/// The process-wide formatter table with the built-in `json`, `markdown`,
/// and `text` entries.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

const ISO_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]Z");
const DISPLAY_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Normalize `date_published` into its display form.
///
/// The extractor emits `YYYY-MM-DDTHH:MM:SS.ffffffZ`; the display form is
/// `YYYY-MM-DD HH:MM:SS`. An absent date renders as an empty string.
///
/// # Errors
///
/// [`PerlegoError::InvalidDate`] when the value does not match the expected
/// shape.
pub(crate) fn display_date(result: &ExtractionResult) -> Result<String> {
    let Some(raw) = result.date_published.as_deref() else {
        return Ok(String::new());
    };

    let parsed = PrimitiveDateTime::parse(raw, ISO_FORMAT).map_err(|e| PerlegoError::InvalidDate {
        value: raw.to_string(),
        reason: e.to_string(),
    })?;

    parsed.format(DISPLAY_FORMAT).map_err(|e| PerlegoError::InvalidDate {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
