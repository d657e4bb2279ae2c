//! # emoji-scan - Emoji detection, lookup and removal
//!
//! emoji-scan finds every known emoji in arbitrary Unicode text, including
//! multi-codepoint sequences such as flags, skin-tone modifiers and
//! zero-width-joiner compounds, and maps each one back to its dictionary
//! record: value, descriptor and shortcode aliases.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`dictionary`] - Immutable emoji dictionary, key derivation, shortcode index
//! - [`scan`] - Longest-match scanner over codepoint sequences
//! - [`index`] - Lookup, batch lookup and removal, plus the process-wide index
//! - [`output`] - Terminal formatting for the CLI
//! - [`utils`] - Configuration and logging setup
//!
//! ## Quick Start
//!
//! ```no_run
//! use emoji_scan::index::EmojiIndex;
//!
//! let index = EmojiIndex::embedded().unwrap();
//!
//! for m in index.find_all("Hello 😀 world") {
//!     println!("{}..{} {}", m.start, m.end, m.record.descriptor);
//! }
//!
//! assert_eq!(index.remove_all("Hello 😀 world"), "Hello world");
//! assert_eq!(index.lookup_by_shortcode(":grinning:").unwrap().value, "😀");
//! ```
//!
//! The free functions at the crate root use a lazily built, process-wide
//! index loaded from the user's configuration (see [`global()`]).

pub mod dictionary;
pub mod error;
pub mod index;
pub mod output;
pub mod scan;
pub mod utils;

use std::sync::Arc;

pub use dictionary::{Dictionary, EmojiRecord, LookupResult, Match};
pub use error::{Error, Result};
pub use index::{global, EmojiIndex};
pub use scan::Scanner;

/// Every emoji in `text`, using the process-wide index
pub fn find_all(text: &str) -> Vec<Match> {
    global().find_all(text)
}

/// Remove every emoji from `text`, using the process-wide index
pub fn remove_all(text: &str) -> String {
    global().remove_all(text)
}

/// Look up one emoji by value, using the process-wide index
pub fn lookup(value: &str) -> Result<Arc<EmojiRecord>> {
    global().lookup(value)
}

/// Look up one emoji by shortcode, using the process-wide index
pub fn lookup_by_shortcode(shortcode: &str) -> Result<Arc<EmojiRecord>> {
    global().lookup_by_shortcode(shortcode)
}

/// Batch lookup by value, using the process-wide index
pub fn lookup_many<S: AsRef<str> + Sync>(values: &[S]) -> Vec<LookupResult> {
    global().lookup_many(values)
}

/// All records of the process-wide index
pub fn all_records() -> &'static [Arc<EmojiRecord>] {
    global().all_records()
}
