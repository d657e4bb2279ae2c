//! The emoji dictionary and its derived shortcode index.
//!
//! A [`Dictionary`] is loaded once from JSON shaped as
//! `{ "<key>": { "key", "value", "descriptor", "shortcodes" } }` and never
//! changes afterwards. Besides key lookup it keeps the codepoint-sequence map
//! the scanner matches against.

pub mod key;
pub mod shortcode;
pub mod types;

pub use key::{chars_key, hex_key, parse_hex_key, KEY_SEPARATOR};
pub use shortcode::{is_shortcode, shortcode_from_descriptor, ShortcodeIndex};
pub use types::{EmojiRecord, LookupResult, Match, SHORTCODE_DELIMITER};

use crate::error::{Error, Result};
use memmap2::Mmap;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Dataset compiled into the binary, used when no external file is available
const EMBEDDED_JSON: &str = include_str!("../../data/emoji.json");

/// Where a loaded dictionary came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    File(PathBuf),
    Embedded,
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionarySource::File(path) => write!(f, "{}", path.display()),
            DictionarySource::Embedded => write!(f, "embedded"),
        }
    }
}

/// Immutable emoji dictionary keyed by canonical hex key
pub struct Dictionary {
    /// Records in key order
    records: Vec<Arc<EmojiRecord>>,
    by_key: FxHashMap<String, usize>,
    /// Codepoint sequence of each record's value
    by_sequence: FxHashMap<Box<[char]>, usize>,
    /// First codepoint of every key, for skipping plain text quickly
    leading: FxHashSet<char>,
    /// Longest key in codepoints
    max_key_len: usize,
}

impl Dictionary {
    /// Parse dictionary JSON from a byte slice
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: BTreeMap<String, EmojiRecord> = serde_json::from_slice(bytes)?;
        Ok(Self::from_records(raw.into_values()))
    }

    /// Parse dictionary JSON from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: BTreeMap<String, EmojiRecord> = serde_json::from_reader(reader)?;
        Ok(Self::from_records(raw.into_values()))
    }

    /// Load a dictionary file through a read-only memory map
    pub fn load_file(path: &Path) -> Result<Self> {
        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let len = file.metadata().map_err(io_err)?.len();
        if len == 0 {
            // Zero-length maps are rejected on some platforms
            return Self::from_slice(&[]);
        }

        let mmap = unsafe { Mmap::map(&file) }.map_err(io_err)?;
        let dict = Self::from_slice(&mmap)?;
        info!(
            path = %path.display(),
            records = dict.len(),
            "loaded emoji dictionary"
        );
        Ok(dict)
    }

    /// The dataset compiled into the crate
    pub fn embedded() -> Result<Self> {
        Self::from_slice(EMBEDDED_JSON.as_bytes())
    }

    /// Load `path` if given, otherwise the embedded dataset.
    ///
    /// With `fallback` set, a missing or malformed file degrades to the
    /// embedded dataset and the original error is only logged.
    pub fn load_with_fallback(
        path: Option<&Path>,
        fallback: bool,
    ) -> Result<(Self, DictionarySource)> {
        let Some(path) = path else {
            return Ok((Self::embedded()?, DictionarySource::Embedded));
        };

        match Self::load_file(path) {
            Ok(dict) => Ok((dict, DictionarySource::File(path.to_path_buf()))),
            Err(err) if fallback => {
                warn!(error = %err, "using embedded emoji dictionary");
                Ok((Self::embedded()?, DictionarySource::Embedded))
            }
            Err(err) => Err(err),
        }
    }

    /// Build a dictionary from records, normalizing each one.
    ///
    /// The key is always re-derived from the value, records with an empty
    /// value are dropped, and records without shortcodes get one generated
    /// from their descriptor. A later record with the same key replaces an
    /// earlier one.
    pub fn from_records<I: IntoIterator<Item = EmojiRecord>>(records: I) -> Self {
        let mut normalized: BTreeMap<String, EmojiRecord> = BTreeMap::new();

        for mut record in records {
            if record.value.is_empty() {
                warn!(key = %record.key, "skipping emoji record with empty value");
                continue;
            }

            let derived = hex_key(&record.value);
            if derived != record.key {
                debug!(stored = %record.key, derived = %derived, "re-keyed emoji record");
                record.key = derived;
            }

            if record.shortcodes.is_empty() {
                let code = shortcode_from_descriptor(&record.descriptor);
                debug!(key = %record.key, shortcode = %code, "generated fallback shortcode");
                record.shortcodes.push(code);
            }

            normalized.insert(record.key.clone(), record);
        }

        let mut dict = Self {
            records: Vec::with_capacity(normalized.len()),
            by_key: FxHashMap::default(),
            by_sequence: FxHashMap::default(),
            leading: FxHashSet::default(),
            max_key_len: 0,
        };

        for (idx, record) in normalized.into_values().enumerate() {
            let sequence: Box<[char]> = record.value.chars().collect();
            dict.max_key_len = dict.max_key_len.max(sequence.len());
            dict.leading.insert(sequence[0]);
            dict.by_sequence.insert(sequence, idx);
            dict.by_key.insert(record.key.clone(), idx);
            dict.records.push(Arc::new(record));
        }

        dict
    }

    /// Look up a record by canonical key
    pub fn get(&self, key: &str) -> Option<&Arc<EmojiRecord>> {
        self.by_key.get(key).map(|&idx| &self.records[idx])
    }

    /// Look up a record by its exact codepoint sequence
    pub fn get_sequence(&self, sequence: &[char]) -> Option<&Arc<EmojiRecord>> {
        self.by_sequence.get(sequence).map(|&idx| &self.records[idx])
    }

    /// True if some key begins with `ch`
    #[inline]
    pub fn may_start_with(&self, ch: char) -> bool {
        self.leading.contains(&ch)
    }

    /// All records, ordered by key
    pub fn all_records(&self) -> &[Arc<EmojiRecord>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Length in codepoints of the longest key
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    /// Serialize back to the on-disk JSON format
    pub fn to_json_pretty(&self) -> Result<String> {
        let map: BTreeMap<&str, &EmojiRecord> = self
            .records
            .iter()
            .map(|r| (r.key.as_str(), r.as_ref()))
            .collect();
        Ok(serde_json::to_string_pretty(&map)?)
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("records", &self.records.len())
            .field("max_key_len", &self.max_key_len)
            .finish()
    }
}
