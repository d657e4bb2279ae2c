use crate::index::EmojiIndex;
use serde::Serialize;

/// Summary of a loaded index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub records: usize,
    pub shortcodes: usize,
    pub shortcode_collisions: usize,
    /// Longest key in codepoints
    pub max_key_len: usize,
    /// Records made of more than one codepoint
    pub multi_codepoint_records: usize,
    pub source: String,
}

impl IndexStats {
    pub fn collect(index: &EmojiIndex) -> Self {
        let dict = index.dictionary();
        Self {
            records: dict.len(),
            shortcodes: index.shortcodes().len(),
            shortcode_collisions: index.shortcodes().collisions(),
            max_key_len: dict.max_key_len(),
            multi_codepoint_records: dict
                .all_records()
                .iter()
                .filter(|r| r.codepoint_len() > 1)
                .count(),
            source: index
                .source()
                .map(ToString::to_string)
                .unwrap_or_else(|| "in-memory".to_string()),
        }
    }
}

/// Display index statistics
pub fn show_stats(index: &EmojiIndex) {
    let stats = index.stats();

    println!("Dictionary Statistics");
    println!("=====================");
    println!();
    println!("Source:           {}", stats.source);
    println!("Records:          {}", stats.records);
    println!("Compound records: {}", stats.multi_codepoint_records);
    println!("Shortcodes:       {}", stats.shortcodes);
    println!("Longest key:      {} codepoints", stats.max_key_len);
    if stats.shortcode_collisions > 0 {
        println!("Collisions:       {} (later record wins)", stats.shortcode_collisions);
    }
}
