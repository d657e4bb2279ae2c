//! Lookup, removal and batch operations over a loaded dictionary.
//!
//! [`EmojiIndex`] owns a [`Dictionary`] together with the [`ShortcodeIndex`]
//! built from it. Both are frozen after construction, so an `EmojiIndex` can
//! be shared across threads by reference.

pub mod global;
pub mod remove;
pub mod stats;

pub use global::{global, install_global, load_configured};
pub use stats::IndexStats;

use crate::dictionary::{
    hex_key, Dictionary, DictionarySource, EmojiRecord, LookupResult, Match, ShortcodeIndex,
};
use crate::error::{Error, Result};
use crate::scan::Scanner;
use rayon::prelude::*;
use std::sync::Arc;

/// Batches at least this large are looked up on the rayon pool
const PARALLEL_BATCH_THRESHOLD: usize = 512;

pub struct EmojiIndex {
    dict: Dictionary,
    shortcodes: ShortcodeIndex,
    source: Option<DictionarySource>,
}

impl EmojiIndex {
    pub fn new(dict: Dictionary) -> Self {
        let shortcodes = ShortcodeIndex::build(dict.all_records());
        Self {
            dict,
            shortcodes,
            source: None,
        }
    }

    /// Like [`EmojiIndex::new`], remembering where the dictionary came from
    pub fn with_source(dict: Dictionary, source: DictionarySource) -> Self {
        Self {
            source: Some(source),
            ..Self::new(dict)
        }
    }

    /// Index over the embedded dataset
    pub fn embedded() -> Result<Self> {
        Ok(Self::with_source(
            Dictionary::embedded()?,
            DictionarySource::Embedded,
        ))
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    pub fn shortcodes(&self) -> &ShortcodeIndex {
        &self.shortcodes
    }

    pub fn source(&self) -> Option<&DictionarySource> {
        self.source.as_ref()
    }

    pub fn scanner(&self) -> Scanner<'_> {
        Scanner::new(&self.dict)
    }

    pub fn all_records(&self) -> &[Arc<EmojiRecord>] {
        self.dict.all_records()
    }

    /// Every emoji in `text`, in order of occurrence
    pub fn find_all(&self, text: &str) -> Vec<Match> {
        self.scanner().find_all(text)
    }

    pub fn count(&self, text: &str) -> usize {
        self.scanner().count(text)
    }

    pub fn contains_emoji(&self, text: &str) -> bool {
        self.scanner().find_first(text).is_some()
    }

    /// Look up a single emoji by its literal value.
    ///
    /// `value` must be exactly one emoji; use [`EmojiIndex::find_all`] for
    /// running text.
    pub fn lookup(&self, value: &str) -> Result<Arc<EmojiRecord>> {
        self.dict
            .get(&hex_key(value))
            .cloned()
            .ok_or_else(|| Error::ValueNotFound(value.to_string()))
    }

    pub fn lookup_by_shortcode(&self, shortcode: &str) -> Result<Arc<EmojiRecord>> {
        self.shortcodes
            .get(shortcode)
            .cloned()
            .ok_or_else(|| Error::ShortcodeNotFound(shortcode.to_string()))
    }

    /// Look up each value, keeping input order. Misses become
    /// [`LookupResult::NotFound`] instead of failing the batch.
    pub fn lookup_many<S: AsRef<str> + Sync>(&self, values: &[S]) -> Vec<LookupResult> {
        let lookup_one = |value: &S| {
            let value = value.as_ref();
            match self.lookup(value) {
                Ok(record) => LookupResult::Found(record),
                Err(_) => LookupResult::NotFound {
                    input: value.to_string(),
                },
            }
        };

        if values.len() >= PARALLEL_BATCH_THRESHOLD {
            values.par_iter().map(lookup_one).collect()
        } else {
            values.iter().map(lookup_one).collect()
        }
    }

    /// Remove every emoji and normalize the remaining whitespace
    pub fn remove_all(&self, text: &str) -> String {
        remove::remove_all(&self.scanner(), text)
    }

    /// Replace every emoji with its first shortcode
    pub fn replace_with_shortcodes(&self, text: &str) -> String {
        remove::replace_with_shortcodes(&self.scanner(), text)
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats::collect(self)
    }
}

impl std::fmt::Debug for EmojiIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmojiIndex")
            .field("dict", &self.dict)
            .field("shortcodes", &self.shortcodes.len())
            .field("source", &self.source)
            .finish()
    }
}
