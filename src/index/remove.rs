use crate::dictionary::Match;
use crate::scan::Scanner;
use std::borrow::Cow;

/// Remove every emoji from `text`, then collapse whitespace runs into single
/// spaces and trim both ends.
///
/// Only the matched spans are deleted. Deleting an emoji can make its
/// neighbors form a new sequence (two regional indicators around a removed
/// face), so the scan repeats until nothing matches.
pub fn remove_all(scanner: &Scanner<'_>, text: &str) -> String {
    let mut current = Cow::Borrowed(text);
    loop {
        let matches = scanner.find_all(&current);
        if matches.is_empty() {
            break;
        }
        current = Cow::Owned(splice(&current, &matches, |_| ""));
    }
    collapse_whitespace(&current)
}

/// Replace every emoji with its first shortcode, leaving whitespace alone
pub fn replace_with_shortcodes(scanner: &Scanner<'_>, text: &str) -> String {
    let matches = scanner.find_all(text);
    if matches.is_empty() {
        return text.to_string();
    }
    splice(text, &matches, |m| {
        m.record.primary_shortcode().unwrap_or(m.record.value.as_str())
    })
}

/// Rebuild `text` with each match replaced by `replacement(match)`.
/// Matches must be ordered and non-overlapping, as the scanner returns them.
fn splice<'m, F>(text: &str, matches: &'m [Match], replacement: F) -> String
where
    F: Fn(&'m Match) -> &'m str,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in matches {
        out.push_str(&text[last..m.start]);
        out.push_str(replacement(m));
        last = m.end;
    }
    out.push_str(&text[last..]);
    out
}

/// Collapse Unicode whitespace runs into one space and trim
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{hex_key, Dictionary, EmojiRecord};

    fn record(value: &str, code: &str) -> EmojiRecord {
        EmojiRecord {
            key: hex_key(value),
            value: value.to_string(),
            descriptor: code.trim_matches(':').to_string(),
            shortcodes: vec![code.to_string()],
        }
    }

    fn test_dict() -> Dictionary {
        Dictionary::from_records([
            record("😀", ":grinning:"),
            record("\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}", ":rainbow_flag:"),
            record("\u{1F1FA}\u{1F1F8}", ":flag_us:"),
            record("\u{1F1F8}\u{1F1FA}", ":flag_su:"),
        ])
    }

    #[test]
    fn test_remove_all_collapses_whitespace() {
        let dict = test_dict();
        let scanner = Scanner::new(&dict);
        let text = "Hello 😀 world \u{1F3F3}\u{FE0F}\u{200D}\u{1F308}!";
        assert_eq!(remove_all(&scanner, text), "Hello world !");
    }

    #[test]
    fn test_remove_all_trims() {
        let dict = test_dict();
        let scanner = Scanner::new(&dict);
        assert_eq!(remove_all(&scanner, "  😀  leading\tand\n\ntrailing 😀 "), "leading and trailing");
        assert_eq!(remove_all(&scanner, "😀😀😀"), "");
        assert_eq!(remove_all(&scanner, ""), "");
    }

    #[test]
    fn test_remove_all_only_touches_spans() {
        let dict = test_dict();
        let scanner = Scanner::new(&dict);

        // The ZWJ and variation selector outside any match survive
        let text = "a\u{200D}b 😀 c\u{FE0F}";
        assert_eq!(remove_all(&scanner, text), "a\u{200D}b c\u{FE0F}");
    }

    #[test]
    fn test_remove_all_rescans_joined_neighbors() {
        let dict = test_dict();
        let scanner = Scanner::new(&dict);

        // U + grinning + S: deleting the face leaves a US flag, which goes too
        let text = "x\u{1F1FA}😀\u{1F1F8}y";
        assert_eq!(remove_all(&scanner, text), "xy");

        let once = remove_all(&scanner, text);
        assert_eq!(remove_all(&scanner, &once), once);
    }

    #[test]
    fn test_replace_with_shortcodes() {
        let dict = test_dict();
        let scanner = Scanner::new(&dict);
        assert_eq!(
            replace_with_shortcodes(&scanner, "hi 😀😀 \u{1F1FA}\u{1F1F8}"),
            "hi :grinning::grinning: :flag_us:"
        );
        assert_eq!(replace_with_shortcodes(&scanner, "plain"), "plain");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \t b\n\nc  "), "a b c");
        assert_eq!(collapse_whitespace("\u{3000}wide\u{00A0}space"), "wide space");
        assert_eq!(collapse_whitespace("   "), "");
    }
}
