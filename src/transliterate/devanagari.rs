//! Devanagari ⇄ Latin substitution tables (ITRANS-flavoured, simplified).
use phf::Map;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Glyph {
    /// Consonant carrying an inherent trailing `a`.
    Consonant(&'static str),
    /// Dependent vowel sign (matra).
    VowelSign(&'static str),
    /// Independent vowels, nasalization marks, virama, avagraha, digits.
    Plain(&'static str),
}

impl Glyph {
    #[inline(always)]
    pub(crate) const fn latin(self) -> &'static str {
        match self {
            Glyph::Consonant(s) | Glyph::VowelSign(s) | Glyph::Plain(s) => s,
        }
    }
}

/// One row list feeds both the lookup map and the ordered slice the reverse table is
/// derived from.
macro_rules! devanagari_table {
    ($($ch:tt => $kind:ident $latin:tt),* $(,)?) => {
        pub(crate) static FORWARD: Map<char, Glyph> = phf::phf_map! {
            $($ch => Glyph::$kind($latin),)*
        };

        /// Forward rows in table order.
        pub(crate) static ROWS: &[(char, &str)] = &[$(($ch, $latin)),*];
    };
}

devanagari_table! {
    // independent vowels
    'अ' => Plain "a",  'आ' => Plain "aa", 'इ' => Plain "i",  'ई' => Plain "ii",
    'उ' => Plain "u",  'ऊ' => Plain "uu", 'ऋ' => Plain "ri", 'ए' => Plain "e",
    'ऐ' => Plain "ai", 'ओ' => Plain "o",  'औ' => Plain "au",
    // matras
    'ा' => VowelSign "aa", 'ि' => VowelSign "i",  'ी' => VowelSign "ii",
    'ु' => VowelSign "u",  'ू' => VowelSign "uu", 'ृ' => VowelSign "ri",
    'े' => VowelSign "e",  'ै' => VowelSign "ai", 'ो' => VowelSign "o",
    'ौ' => VowelSign "au",
    // consonants
    'क' => Consonant "ka",  'ख' => Consonant "kha",  'ग' => Consonant "ga",
    'घ' => Consonant "gha", 'ङ' => Consonant "nga",
    'च' => Consonant "cha", 'छ' => Consonant "chha", 'ज' => Consonant "ja",
    'झ' => Consonant "jha", 'ञ' => Consonant "nya",
    'ट' => Consonant "Ta",  'ठ' => Consonant "Tha",  'ड' => Consonant "Da",
    'ढ' => Consonant "Dha", 'ण' => Consonant "Na",
    'त' => Consonant "ta",  'थ' => Consonant "tha",  'द' => Consonant "da",
    'ध' => Consonant "dha", 'न' => Consonant "na",
    'प' => Consonant "pa",  'फ' => Consonant "pha",  'ब' => Consonant "ba",
    'भ' => Consonant "bha", 'म' => Consonant "ma",
    'य' => Consonant "ya",  'र' => Consonant "ra",   'ल' => Consonant "la",
    'व' => Consonant "va",  'श' => Consonant "sha",
    'ष' => Consonant "Sha", 'स' => Consonant "sa",   'ह' => Consonant "ha",
    // anusvara, visarga, virama, chandrabindu, avagraha
    'ं' => Plain "n", 'ः' => Plain "h", '्' => Plain "", 'ँ' => Plain "n", 'ऽ' => Plain "'",
    // digits
    '०' => Plain "0", '१' => Plain "1", '२' => Plain "2", '३' => Plain "3", '४' => Plain "4",
    '५' => Plain "5", '६' => Plain "6", '७' => Plain "7", '८' => Plain "8", '९' => Plain "9",
}

/// Inverted forward table, longest key first.
///
/// Later rows win when two characters share a romanization (`"aa"` reads back as the matra
/// `ा`, not `आ`). Rows mapping to the empty string are not invertible and are skipped.
pub(crate) static REVERSE: LazyLock<Vec<(&'static str, char)>> = LazyLock::new(|| {
    let mut table: Vec<(&'static str, char)> = Vec::with_capacity(ROWS.len());
    for &(ch, latin) in ROWS {
        if latin.is_empty() {
            continue;
        }
        match table.iter_mut().find(|(key, _)| *key == latin) {
            Some(slot) => slot.1 = ch,
            None => table.push((latin, ch)),
        }
    }
    // Stable: equal-length keys keep table order.
    table.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    table
});

pub(crate) fn to_latin(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_consonant = false;
    for c in text.chars() {
        match FORWARD.get(&c).copied() {
            Some(Glyph::VowelSign(latin)) if after_consonant => {
                // The matra replaces the consonant's inherent vowel.
                if out.ends_with('a') {
                    out.pop();
                }
                out.push_str(latin);
                after_consonant = false;
            }
            Some(glyph) => {
                out.push_str(glyph.latin());
                after_consonant = matches!(glyph, Glyph::Consonant(_));
            }
            None => {
                out.push(c);
                after_consonant = false;
            }
        }
    }
    out
}

pub(crate) fn to_devanagari(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        match REVERSE.iter().find(|(key, _)| rest.starts_with(key)) {
            Some(&(key, ch)) => {
                out.push(ch);
                rest = &rest[key.len()..];
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_rows_are_unique() {
        assert_eq!(FORWARD.len(), ROWS.len());
        for &(ch, latin) in ROWS {
            assert_eq!(FORWARD.get(&ch).map(|g| g.latin()), Some(latin));
        }
    }

    #[test]
    fn consonants_carry_inherent_a() {
        for (ch, glyph) in FORWARD.entries() {
            if let Glyph::Consonant(latin) = glyph {
                assert!(latin.ends_with('a'), "{ch} => {latin}");
            }
        }
    }

    #[test]
    fn reverse_is_sorted_longest_first() {
        assert!(REVERSE.windows(2).all(|w| w[0].0.len() >= w[1].0.len()));
        assert_eq!(REVERSE[0].0.len(), 4);
        assert!(!REVERSE.iter().any(|(key, _)| key.is_empty()));
    }

    #[test]
    fn reverse_prefers_later_rows() {
        let lookup = |k: &str| REVERSE.iter().find(|(key, _)| *key == k).map(|&(_, c)| c);
        assert_eq!(lookup("aa"), Some('ा'));
        assert_eq!(lookup("i"), Some('ि'));
        assert_eq!(lookup("n"), Some('ँ'));
        assert_eq!(lookup("a"), Some('अ'));
    }

    #[test]
    fn matra_replaces_inherent_vowel() {
        assert_eq!(to_latin("क"), "ka");
        assert_eq!(to_latin("कि"), "ki");
        assert_eq!(to_latin("की"), "kii");
        assert_eq!(to_latin("नमस्ते"), "namasate");
        // an independent vowel after a consonant is not a matra
        assert_eq!(to_latin("कइ"), "kai");
    }

    #[test]
    fn longest_match_wins() {
        assert_eq!(to_devanagari("khaTa"), "खट");
        assert_eq!(to_devanagari("chha"), "छ");
        assert_eq!(to_devanagari("ka"), "क");
    }
}
