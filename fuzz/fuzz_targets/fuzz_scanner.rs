#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::LazyLock;

static INDEX: LazyLock<emoji_scan::EmojiIndex> =
    LazyLock::new(|| emoji_scan::EmojiIndex::embedded().unwrap());

fuzz_target!(|data: &str| {
    // Spans must stay on char boundaries and removal must settle in one pass
    let matches = INDEX.find_all(data);
    for m in &matches {
        assert_eq!(m.as_str(data), m.record.value);
    }
    let once = INDEX.remove_all(data);
    assert_eq!(INDEX.remove_all(&once), once);
    let _ = INDEX.replace_with_shortcodes(data);
});
