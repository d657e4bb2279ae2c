use crate::dictionary::{Dictionary, Match};
use std::sync::Arc;

/// Finds emoji in text by longest match against a [`Dictionary`].
///
/// The scanner only borrows the dictionary and keeps no state between calls,
/// so one dictionary can serve any number of concurrent scans.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'d> {
    dict: &'d Dictionary,
}

impl<'d> Scanner<'d> {
    pub fn new(dict: &'d Dictionary) -> Self {
        Self { dict }
    }

    /// All emoji in `text`, left to right and non-overlapping.
    ///
    /// At each codepoint the longest dictionary sequence starting there wins,
    /// trying window lengths from the dictionary's longest key down to one.
    /// Positions that start no key are skipped one codepoint at a time.
    pub fn find_all(&self, text: &str) -> Vec<Match> {
        let mut matches = Vec::new();
        self.scan(text, |m| {
            matches.push(m);
            true
        });
        matches
    }

    /// The leftmost emoji in `text`, if any
    pub fn find_first(&self, text: &str) -> Option<Match> {
        let mut first = None;
        self.scan(text, |m| {
            first = Some(m);
            false
        });
        first
    }

    /// Number of emoji in `text`
    pub fn count(&self, text: &str) -> usize {
        let mut count = 0;
        self.scan(text, |_| {
            count += 1;
            true
        });
        count
    }

    /// Drive the scan, handing each match to `emit` until it returns false
    fn scan<F>(&self, text: &str, mut emit: F)
    where
        F: FnMut(Match) -> bool,
    {
        let max_len = self.dict.max_key_len();
        if max_len == 0 || text.is_empty() {
            return;
        }

        // Codepoints with their byte offsets; offsets[i] is where chars[i] starts
        let (chars, offsets): (Vec<char>, Vec<usize>) =
            text.char_indices().map(|(pos, ch)| (ch, pos)).unzip();
        let byte_end = |idx: usize| offsets.get(idx).copied().unwrap_or(text.len());

        let mut i = 0;
        while i < chars.len() {
            if !self.dict.may_start_with(chars[i]) {
                i += 1;
                continue;
            }

            let longest = max_len.min(chars.len() - i);
            let found = (1..=longest)
                .rev()
                .find_map(|len| self.dict.get_sequence(&chars[i..i + len]).map(|r| (len, r)));

            match found {
                Some((len, record)) => {
                    let m = Match {
                        record: Arc::clone(record),
                        start: offsets[i],
                        end: byte_end(i + len),
                        char_start: i,
                    };
                    if !emit(m) {
                        return;
                    }
                    i += len;
                }
                None => i += 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{hex_key, EmojiRecord};

    fn record(value: &str, descriptor: &str, code: &str) -> EmojiRecord {
        EmojiRecord {
            key: hex_key(value),
            value: value.to_string(),
            descriptor: descriptor.to_string(),
            shortcodes: vec![code.to_string()],
        }
    }

    fn test_dict() -> Dictionary {
        Dictionary::from_records([
            record("😀", "Grinning Face", ":grinning:"),
            record("🏳️", "White Flag", ":white_flag:"),
            record("🌈", "Rainbow", ":rainbow:"),
            record("🏳️‍🌈", "Rainbow Flag", ":rainbow_flag:"),
            record("👍", "Thumbs Up", ":+1:"),
            record("👍🏽", "Thumbs Up: Medium Skin Tone", ":+1_tone3:"),
            record("🇺🇸", "Flag: United States", ":flag_us:"),
            record("🇫🇷", "Flag: France", ":flag_fr:"),
        ])
    }

    fn descriptors(matches: &[Match]) -> Vec<&str> {
        matches.iter().map(|m| m.record.descriptor.as_str()).collect()
    }

    #[test]
    fn test_finds_simple_and_compound() {
        let dict = test_dict();
        let scanner = Scanner::new(&dict);
        let text = "Hello 😀 world 🏳️‍🌈!";

        let matches = scanner.find_all(text);
        assert_eq!(descriptors(&matches), vec!["Grinning Face", "Rainbow Flag"]);
        assert_eq!(matches[0].as_str(text), "😀");
        assert_eq!(matches[1].as_str(text), "🏳️‍🌈");
        assert_eq!(&text[matches[1].end..], "!");
    }

    #[test]
    fn test_longest_match_wins() {
        let dict = test_dict();
        let scanner = Scanner::new(&dict);

        let matches = scanner.find_all("👍🏽");
        assert_eq!(descriptors(&matches), vec!["Thumbs Up: Medium Skin Tone"]);

        // Base emoji with an unknown modifier is matched alone
        let matches = scanner.find_all("👍🏿");
        assert_eq!(descriptors(&matches), vec!["Thumbs Up"]);
        assert_eq!(matches[0].len(), "👍".len());
    }

    #[test]
    fn test_adjacent_emoji_stay_separate() {
        let dict = test_dict();
        let scanner = Scanner::new(&dict);

        let matches = scanner.find_all("😀😀👍");
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].end, matches[1].start);
        assert_eq!(matches[2].char_start, 2);
    }

    #[test]
    fn test_flag_pairs() {
        let dict = test_dict();
        let scanner = Scanner::new(&dict);

        let matches = scanner.find_all("🇺🇸🇫🇷");
        assert_eq!(descriptors(&matches), vec!["Flag: United States", "Flag: France"]);

        // A lone regional indicator is not an emoji on its own
        assert!(scanner.find_all("🇺").is_empty());
    }

    #[test]
    fn test_partial_sequence_falls_back_to_parts() {
        let dict = test_dict();
        let scanner = Scanner::new(&dict);

        // White flag + ZWJ without the rainbow: only the flag is known
        let matches = scanner.find_all("🏳️\u{200D}x");
        assert_eq!(descriptors(&matches), vec!["White Flag"]);
    }

    #[test]
    fn test_no_matches() {
        let dict = test_dict();
        let scanner = Scanner::new(&dict);

        assert!(scanner.find_all("").is_empty());
        assert!(scanner.find_all("plain ascii text").is_empty());
        assert!(scanner.find_all("ünïcödé ☃").is_empty());
        assert_eq!(scanner.count("nothing here"), 0);
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::from_records(Vec::new());
        let scanner = Scanner::new(&dict);
        assert!(scanner.find_all("😀").is_empty());
    }

    #[test]
    fn test_find_first_and_count() {
        let dict = test_dict();
        let scanner = Scanner::new(&dict);
        let text = "a 🌈 b 😀 c 🌈";

        let first = scanner.find_first(text).unwrap();
        assert_eq!(first.record.descriptor, "Rainbow");
        assert_eq!(first.start, 2);
        assert_eq!(scanner.count(text), 3);
        assert!(scanner.find_first("none").is_none());
    }

    #[test]
    fn test_matches_ordered_and_disjoint() {
        let dict = test_dict();
        let scanner = Scanner::new(&dict);
        let matches = scanner.find_all("🏳️‍🌈🏳️🌈 👍🏽👍 🇺🇸x😀");

        for pair in matches.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
        assert_eq!(matches.len(), 7);
    }
}
