#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must load or fail cleanly, never panic
    if let Ok(dict) = emoji_scan::Dictionary::from_slice(data) {
        let index = emoji_scan::EmojiIndex::new(dict);
        for record in index.all_records() {
            let _ = index.find_all(&record.value);
        }
    }
});
