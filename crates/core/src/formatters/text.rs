use crate::article::ExtractionResult;
use crate::formatters::display_date;
use crate::{PerlegoError, Result};

/// Render the result as plain text.
///
/// A metadata block (url, date, author), the plain title, then the
/// plain-text rendering of the content. The content line is empty when the
/// result has not been transformed.
///
/// # Errors
///
/// [`PerlegoError::MissingField`] when `title`, `author`, or `url` is
/// absent; [`PerlegoError::InvalidDate`] on a malformed `date_published`.
pub fn text_format(result: &ExtractionResult) -> Result<String> {
    let date = display_date(result)?;
    let author = result.author.as_deref().ok_or(PerlegoError::MissingField("author"))?;
    let title = result.title.as_deref().ok_or(PerlegoError::MissingField("title"))?;
    let url = result.url.as_deref().ok_or(PerlegoError::MissingField("url"))?;
    let body = result.content_bundle().map_or("", |bundle| bundle.text.as_str());

    Ok(format!(
        "url: {url}\ndate: {date}\nauthor(s): {author}\n\n{title}\n\n{body}"
    ))
}
