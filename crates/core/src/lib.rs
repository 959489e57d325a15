pub mod article;
pub mod entities;
pub mod error;
pub mod extractor;
pub mod formatters;
pub mod loader;
pub mod transform;

pub use article::{Content, ContentBundle, ExtractionResult};
pub use entities::unescape;
pub use error::{PerlegoError, Result};
pub use extractor::DEFAULT_PARSER_PATH;
pub use formatters::{FormatFn, Registry, registry};
pub use formatters::{json_format, markdown_format, text_format};
pub use loader::load;
pub use transform::transform;
