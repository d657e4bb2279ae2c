use crate::dictionary::Dictionary;
use crate::index::EmojiIndex;
use crate::utils::AppConfig;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::OnceLock;
use tracing::{error, warn};

static GLOBAL: OnceLock<EmojiIndex> = OnceLock::new();

/// Build an index the way the CLI does: `dictionary` if given, else
/// `EMOJI_SCAN_DICTIONARY`, else the configured path, else the embedded data.
pub fn load_configured(dictionary: Option<&Path>) -> Result<EmojiIndex> {
    let config = AppConfig::load()?;
    let path = config.resolve_dictionary_path(dictionary);

    let (dict, source) = Dictionary::load_with_fallback(path.as_deref(), config.fallback_to_embedded)
        .context("Failed to load emoji dictionary")?;
    Ok(EmojiIndex::with_source(dict, source))
}

/// Process-wide index, built on first use.
///
/// Initialization runs once even under concurrent first use. Configuration
/// problems never abort it: the embedded dataset is used instead.
pub fn global() -> &'static EmojiIndex {
    GLOBAL.get_or_init(|| {
        load_configured(None).unwrap_or_else(|err| {
            warn!(error = %format!("{err:#}"), "falling back to embedded emoji dictionary");
            EmojiIndex::embedded().unwrap_or_else(|err| {
                error!(error = %err, "embedded emoji dictionary is unusable");
                EmojiIndex::new(Dictionary::from_records(Vec::new()))
            })
        })
    })
}

/// Install `index` as the process-wide index.
///
/// Fails, handing the index back, if the global was already initialized.
pub fn install_global(index: EmojiIndex) -> std::result::Result<(), EmojiIndex> {
    GLOBAL.set(index)
}
