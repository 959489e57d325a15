use crate::article::ExtractionResult;
use crate::formatters::display_date;
use crate::{PerlegoError, Result};

/// Render the result as a Markdown document.
///
/// A metadata block (date, author) with hard line breaks, a level-1 heading
/// linking the title to the source URL, then the Markdown rendering of the
/// content. The content line is empty when the result has not been
/// transformed.
///
/// # Errors
///
/// [`PerlegoError::MissingField`] when `title`, `author`, or `url` is
/// absent; [`PerlegoError::InvalidDate`] on a malformed `date_published`.
pub fn markdown_format(result: &ExtractionResult) -> Result<String> {
    let date = display_date(result)?;
    let author = result.author.as_deref().ok_or(PerlegoError::MissingField("author"))?;
    let title = result.title.as_deref().ok_or(PerlegoError::MissingField("title"))?;
    let url = result.url.as_deref().ok_or(PerlegoError::MissingField("url"))?;
    let body = result.content_bundle().map_or("", |bundle| bundle.markdown.as_str());

    // Two trailing spaces on the metadata lines are Markdown hard breaks.
    Ok(format!(
        "date: {date}  \nauthor(s): {author}  \n\n# [{title}]({url})\n\n{body}"
    ))
}
