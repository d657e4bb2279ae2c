use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by dictionary loading and single-item lookups.
#[derive(Debug, Error)]
pub enum Error {
    /// The dictionary source could not be read.
    #[error("Failed to read emoji dictionary {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dictionary source is not valid dictionary JSON.
    #[error("Malformed emoji dictionary: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("No record for \"{0}\" could be found")]
    ValueNotFound(String),

    #[error("No emoji found for shortcode \"{0}\"")]
    ShortcodeNotFound(String),
}

impl Error {
    /// True for the load-time failures (missing or malformed source).
    pub fn is_load_error(&self) -> bool {
        matches!(self, Error::Io { .. } | Error::Malformed(_))
    }

    /// True for lookup misses, which are always recoverable.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ValueNotFound(_) | Error::ShortcodeNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        let err = Error::ValueNotFound("abc".to_string());
        assert_eq!(err.to_string(), "No record for \"abc\" could be found");
        assert!(err.is_not_found());
        assert!(!err.is_load_error());

        let err = Error::ShortcodeNotFound(":nope:".to_string());
        assert_eq!(err.to_string(), "No emoji found for shortcode \":nope:\"");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_error_kinds() {
        let io = Error::Io {
            path: PathBuf::from("/missing/emoji.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(io.is_load_error());
        assert!(io.to_string().contains("/missing/emoji.json"));

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let malformed = Error::from(parse);
        assert!(malformed.is_load_error());
    }
}
