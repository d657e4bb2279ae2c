use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Opening and closing character of every shortcode
pub const SHORTCODE_DELIMITER: char = ':';

/// A single emoji definition.
///
/// Equality compares key, value, descriptor and the shortcode list in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmojiRecord {
    /// Canonical hex-joined codepoint key
    pub key: String,
    /// The literal emoji
    pub value: String,
    /// Human-readable name, e.g. "Grinning Face"
    pub descriptor: String,
    /// Aliases such as `:grinning:`
    #[serde(default)]
    pub shortcodes: Vec<String>,
}

impl EmojiRecord {
    /// Number of codepoints in the emoji value
    pub fn codepoint_len(&self) -> usize {
        self.value.chars().count()
    }

    /// First shortcode, if the record has any
    pub fn primary_shortcode(&self) -> Option<&str> {
        self.shortcodes.first().map(String::as_str)
    }
}

/// One emoji occurrence found by the scanner.
///
/// `start..end` is a byte range into the scanned text. Records are shared with
/// the dictionary through an `Arc`, so a match outlives the scan that made it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub record: Arc<EmojiRecord>,
    /// Byte offset of the first codepoint
    pub start: usize,
    /// Byte offset one past the last codepoint
    pub end: usize,
    /// Codepoint index of the first codepoint
    pub char_start: usize,
}

impl Match {
    /// Byte length of the matched span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Codepoint index one past the last codepoint
    pub fn char_end(&self) -> usize {
        self.char_start + self.record.codepoint_len()
    }

    /// The matched slice of `text`, which must be the scanned input
    pub fn as_str<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Outcome of one item in a batch lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupResult {
    Found(Arc<EmojiRecord>),
    NotFound { input: String },
}

impl LookupResult {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }

    pub fn record(&self) -> Option<&EmojiRecord> {
        match self {
            LookupResult::Found(record) => Some(record),
            LookupResult::NotFound { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grinning() -> EmojiRecord {
        EmojiRecord {
            key: "1F600".to_string(),
            value: "😀".to_string(),
            descriptor: "Grinning Face".to_string(),
            shortcodes: vec![":grinning:".to_string()],
        }
    }

    #[test]
    fn test_record_equality_is_ordered() {
        let a = EmojiRecord {
            shortcodes: vec![":a:".to_string(), ":b:".to_string()],
            ..grinning()
        };
        let b = EmojiRecord {
            shortcodes: vec![":b:".to_string(), ":a:".to_string()],
            ..grinning()
        };
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_match_spans() {
        let text = "hi 😀";
        let m = Match {
            record: Arc::new(grinning()),
            start: 3,
            end: 7,
            char_start: 3,
        };
        assert_eq!(m.as_str(text), "😀");
        assert_eq!(m.len(), 4);
        assert_eq!(m.char_end(), 4);
    }

    #[test]
    fn test_lookup_result_serializes_tagged() {
        let found = LookupResult::Found(Arc::new(grinning()));
        let json = serde_json::to_value(&found).unwrap();
        assert_eq!(json["status"], "found");
        assert_eq!(json["descriptor"], "Grinning Face");

        let missing = LookupResult::NotFound {
            input: "x".to_string(),
        };
        let json = serde_json::to_value(&missing).unwrap();
        assert_eq!(json["status"], "not_found");
        assert_eq!(json["input"], "x");
    }
}
