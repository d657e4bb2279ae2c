use crate::dictionary::types::{EmojiRecord, SHORTCODE_DELIMITER};
use regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::{Arc, LazyLock};
use tracing::debug;

/// Everything except ASCII alphanumerics, whitespace and hyphens
static NON_SHORTCODE_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-zA-Z0-9\s-]+").expect("static shortcode regex is valid")
});

/// Build a shortcode from an emoji's descriptor.
///
/// Used for records that ship without any shortcode. Symbols are dropped,
/// the rest is lowercased, and spaces and hyphens become underscores:
/// "Flag: Antigua & Barbuda" gives `:flag_antigua__barbuda:`.
pub fn shortcode_from_descriptor(descriptor: &str) -> String {
    let stripped = NON_SHORTCODE_CHARS.replace_all(descriptor, "");
    let body: String = stripped
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect();
    format!("{SHORTCODE_DELIMITER}{body}{SHORTCODE_DELIMITER}")
}

/// True when `code` is wrapped in the shortcode delimiter with a non-empty body
pub fn is_shortcode(code: &str) -> bool {
    code.len() > 2
        && code.starts_with(SHORTCODE_DELIMITER)
        && code.ends_with(SHORTCODE_DELIMITER)
}

/// Shortcode to record map, built once from the dictionary's records.
///
/// When two records claim the same shortcode the later one in iteration order
/// wins. That is a data problem, not an error, so it is only logged.
#[derive(Debug, Default)]
pub struct ShortcodeIndex {
    codes: FxHashMap<String, Arc<EmojiRecord>>,
    collisions: usize,
}

impl ShortcodeIndex {
    pub fn build<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Arc<EmojiRecord>>,
    {
        let mut codes: FxHashMap<String, Arc<EmojiRecord>> = FxHashMap::default();
        let mut collisions = 0;

        for record in records {
            for code in &record.shortcodes {
                if let Some(previous) = codes.insert(code.clone(), Arc::clone(record)) {
                    if previous.key != record.key {
                        collisions += 1;
                        debug!(
                            shortcode = %code,
                            replaced = %previous.key,
                            by = %record.key,
                            "shortcode claimed by more than one emoji"
                        );
                    }
                }
            }
        }

        Self { codes, collisions }
    }

    pub fn get(&self, shortcode: &str) -> Option<&Arc<EmojiRecord>> {
        self.codes.get(shortcode)
    }

    /// Number of distinct shortcodes
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// How many shortcodes were overwritten by a later record during build
    pub fn collisions(&self) -> usize {
        self.collisions
    }
}
