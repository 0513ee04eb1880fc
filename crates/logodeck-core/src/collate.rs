//! Human-friendly string ordering.
//!
//! Byte order puts every uppercase letter before every lowercase one and
//! sorts accented letters after `z`. [`compare`] orders the way a reader
//! expects instead, in three levels:
//!
//! 1. base letters, ignoring case and accents (`"émile"` sits with `"e"`,
//!    `"Øffice"` with `"o"`); punctuation and spaces rank below digits,
//!    digits below letters
//! 2. accents (`"resume"` before `"résumé"`)
//! 3. case, lowercase first (`"azure"` before `"Azure"`)
//!
//! Strings equal on all three levels fall back to code point order, so the
//! result is a total order.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two strings in natural alphabetical order.
pub fn compare(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(tertiary_key(b)))
        .then_with(|| a.cmp(b))
}

/// Character class rank. Letters rank highest, punctuation and spaces lowest.
fn class_rank(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}

/// Letters with no canonical decomposition, spelled with their base letters.
fn fold(c: char) -> Option<&'static str> {
    match c {
        'ø' => Some("o"),
        'ł' => Some("l"),
        'đ' => Some("d"),
        'ð' => Some("d"),
        'þ' => Some("th"),
        'æ' => Some("ae"),
        'œ' => Some("oe"),
        'ß' => Some("ss"),
        'ı' => Some("i"),
        _ => None,
    }
}

/// Lowercased base letters with accents stripped, each tagged with its class.
fn primary_key(s: &str) -> Vec<(u8, char)> {
    let mut key = Vec::with_capacity(s.len());
    for c in s
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
    {
        match fold(c) {
            Some(base) => key.extend(base.chars().map(|b| (class_rank(b), b))),
            None => key.push((class_rank(c), c)),
        }
    }
    key
}

/// Lowercased decomposition, accents kept.
fn secondary_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

fn tertiary_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(words: &[&str]) -> Vec<String> {
        let mut words: Vec<String> = words.iter().map(|s| s.to_string()).collect();
        words.sort_by(|a, b| compare(a, b));
        words
    }

    #[test]
    fn test_case_insensitive_alphabetical() {
        assert_eq!(
            sorted(&["banana", "Apple", "cherry", "Banana"]),
            vec!["Apple", "banana", "Banana", "cherry"]
        );
    }

    #[test]
    fn test_accents_sort_with_base_letter() {
        assert_eq!(
            sorted(&["Fox", "Émile", "Elephant", "Zebra"]),
            vec!["Elephant", "Émile", "Fox", "Zebra"]
        );
    }

    #[test]
    fn test_unaccented_before_accented() {
        assert_eq!(compare("resume", "résumé"), Ordering::Less);
        assert_eq!(compare("résumé", "resume"), Ordering::Greater);
    }

    #[test]
    fn test_lowercase_before_uppercase() {
        assert_eq!(compare("azure", "Azure"), Ordering::Less);
    }

    #[test]
    fn test_equal() {
        assert_eq!(compare("Teams", "Teams"), Ordering::Equal);
        assert_eq!(compare("", ""), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare("Azure", "Azure VM"), Ordering::Less);
    }

    #[test]
    fn test_letters_without_decomposition_sort_with_base_letter() {
        assert_eq!(compare("Øffice", "Teams"), Ordering::Less);
        assert_eq!(compare("Łukasz", "Mail"), Ordering::Less);
        assert_eq!(compare("Æther", "Bing"), Ordering::Less);
        assert_eq!(compare("Straße", "Strasse"), Ordering::Greater);
        assert_eq!(
            sorted(&["Zune", "Øffice", "Mail", "Łukasz"]),
            vec!["Łukasz", "Mail", "Øffice", "Zune"]
        );
    }

    #[test]
    fn test_punctuation_before_digits_before_letters() {
        assert_eq!(compare("{x}", "Zune"), Ordering::Less);
        assert_eq!(compare("~tilde", "0day"), Ordering::Less);
        assert_eq!(compare("365", "Access"), Ordering::Less);
        assert_eq!(
            sorted(&["Word", "|pipe", "2019", "_draft"]),
            vec!["_draft", "|pipe", "2019", "Word"]
        );
    }

    #[test]
    fn test_precomposed_and_decomposed_are_adjacent() {
        let composed = "\u{e9}cole";
        let decomposed = "e\u{301}cole";
        assert_ne!(compare(composed, decomposed), Ordering::Equal);
        assert_eq!(compare(composed, "ecole"), Ordering::Greater);
        assert_eq!(compare(decomposed, "ecole"), Ordering::Greater);
        assert_eq!(compare(composed, "edge"), Ordering::Less);
    }
}
