use crate::Result;
use crate::article::ExtractionResult;

/// Serialize the full extraction result as compact JSON.
///
/// Non-ASCII characters are written unescaped; unknown keys from the
/// external tool are preserved.
pub fn json_format(result: &ExtractionResult) -> Result<String> {
    Ok(serde_json::to_string(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::{Content, ContentBundle};
    use serde_json::Value;

    fn sample() -> ExtractionResult {
        ExtractionResult {
            title: Some("Überschrift".to_string()),
            author: Some("A".to_string()),
            url: Some("http://x".to_string()),
            content: Some(Content::Bundle(ContentBundle {
                html: "<p>Hi</p>".to_string(),
                markdown: "Hi".to_string(),
                text: "Hi".to_string(),
            })),
            ..Default::default()
        }
    }

    #[test]
    fn test_round_trips() {
        let json = json_format(&sample()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "Überschrift");
        assert_eq!(value["url"], "http://x");
        assert_eq!(value["content"]["html"], "<p>Hi</p>");
        assert_eq!(value["content"]["markdown"], "Hi");
        assert_eq!(value["content"]["text"], "Hi");
    }

    #[test]
    fn test_non_ascii_unescaped() {
        let json = json_format(&sample()).unwrap();
        assert!(json.contains("Überschrift"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_does_not_require_template_fields() {
        // Unlike the template formatters, json serializes whatever is there.
        let json = json_format(&ExtractionResult::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
