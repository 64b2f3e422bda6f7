//! Locale-aware ordering of display names.
//!
//! Names compare on their base letters first (case and diacritics ignored),
//! then on diacritics, then on case with lowercase first. The root order
//! matches how browsers order Latin-script names with `localeCompare`:
//! `Łukasz` sorts between `Lena` and `Marek`, `émile` right after `Emil`.
//!
//! Polish tailors the alphabet: `ą ć ę ł ń ó ś ź ż` are letters of their own
//! that follow their base letter, so `Lz` precedes `Łukasz` and `Zenon`
//! precedes `Źenon`, which precedes `Żaneta`.

use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Alphabet rules used to order names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Collation {
    #[default]
    Root,
    Polish,
}

impl Collation {
    /// Rules for a BCP 47 language tag such as `pl-PL`; unknown languages
    /// use the root order.
    pub fn for_language(tag: &str) -> Self {
        let language = tag.split(|c| c == '-' || c == '_').next().unwrap_or_default();
        if language.eq_ignore_ascii_case("pl") {
            Collation::Polish
        } else {
            Collation::Root
        }
    }

    /// Letters the alphabet sorts after their base letter, with their rank.
    fn tailored(&self, lower: char) -> Option<(char, u8)> {
        match self {
            Collation::Root => None,
            Collation::Polish => Some(match lower {
                'ą' => ('a', 1),
                'ć' => ('c', 1),
                'ę' => ('e', 1),
                'ł' => ('l', 1),
                'ń' => ('n', 1),
                'ó' => ('o', 1),
                'ś' => ('s', 1),
                'ź' => ('z', 1),
                'ż' => ('z', 2),
                _ => return None,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<(char, u8)>,
    accents: String,
    case: Vec<bool>,
    raw: String,
}

impl CollationKey {
    pub fn new(text: &str, collation: Collation) -> Self {
        let mut primary = Vec::with_capacity(text.len());
        for ch in text.nfc() {
            let mut lower = ch.to_lowercase();
            if let (Some(single), None) = (lower.next(), lower.next()) {
                if let Some(letter) = collation.tailored(single) {
                    primary.push(letter);
                    continue;
                }
            }
            for base in std::iter::once(ch).nfd().filter(|c| !is_combining_mark(*c)) {
                match fold_letter(base) {
                    Some(folded) => primary.extend(folded.chars().map(|c| (c, 0))),
                    None => primary.extend(base.to_lowercase().map(|c| (c, 0))),
                }
            }
        }

        let accents = text.nfd().flat_map(char::to_lowercase).collect();
        let case = text
            .chars()
            .filter(|c| c.is_alphabetic())
            .map(char::is_uppercase)
            .collect();

        Self {
            primary,
            accents,
            case,
            raw: text.to_string(),
        }
    }
}

/// Letters that carry a diacritic but have no canonical decomposition.
fn fold_letter(ch: char) -> Option<&'static str> {
    Some(match ch {
        'ł' | 'Ł' => "l",
        'đ' | 'Đ' => "d",
        'ø' | 'Ø' => "o",
        'ħ' | 'Ħ' => "h",
        'ß' => "ss",
        'æ' | 'Æ' => "ae",
        'œ' | 'Œ' => "oe",
        _ => return None,
    })
}

pub fn compare(a: &str, b: &str, collation: Collation) -> Ordering {
    CollationKey::new(a, collation).cmp(&CollationKey::new(b, collation))
}
