//! Script classification by codepoint range.
//!
//! [`Script`] is a closed enumeration of the writing systems polytext knows about. Each script
//! has a display name (used at every string boundary: serde, CLI, registry documents) and an
//! optional deterministic language used by the detector. [`SCRIPT_RANGES`] is the ordered
//! codepoint table driving [`detect_script`]; its order is also the tie-break order.
use crate::error::PolytextError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// ---------------------------------------------------------------------------
///    Macro – generates the enum, its names and its language mapping
/// ---------------------------------------------------------------------------
macro_rules! define_scripts {
    ($(
        $variant:ident, $name:literal, primary: $primary:expr
    ),* $(,)?) => {
        /// A writing system. `Unknown` is the sentinel returned when nothing matched.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Script {
            $($variant,)*
            Unknown,
        }

        impl Script {
            /// Every known script, `Unknown` excluded, in declaration order.
            pub const ALL: &'static [Script] = &[$(Script::$variant),*];

            #[inline(always)]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Script::$variant => $name,)*
                    Script::Unknown => "Unknown",
                }
            }

            /// The single language this script is attributed to by detection, if any.
            ///
            /// `None` means the script alone says nothing about the language (Latin) or
            /// that no deterministic choice exists.
            #[inline(always)]
            pub const fn primary_language(self) -> Option<&'static str> {
                match self {
                    $(Script::$variant => $primary,)*
                    Script::Unknown => None,
                }
            }
        }
    };
}

define_scripts! {
    Latin,       "Latin",        primary: None,
    Devanagari,  "Devanagari",   primary: Some("hi"),
    Bengali,     "Bengali",      primary: Some("bn"),
    Gurmukhi,    "Gurmukhi",     primary: Some("pa"),
    Gujarati,    "Gujarati",     primary: Some("gu"),
    Odia,        "Odia",         primary: Some("or"),
    Tamil,       "Tamil",        primary: Some("ta"),
    Telugu,      "Telugu",       primary: Some("te"),
    Kannada,     "Kannada",      primary: Some("kn"),
    Malayalam,   "Malayalam",    primary: Some("ml"),
    Sinhala,     "Sinhala",      primary: Some("si"),
    Thai,        "Thai",         primary: Some("th"),
    Lao,         "Lao",          primary: Some("lo"),
    Tibetan,     "Tibetan",      primary: Some("bo"),
    Myanmar,     "Myanmar",      primary: Some("my"),
    Georgian,    "Georgian",     primary: Some("ka"),
    Hangul,      "Hangul",       primary: Some("ko"),
    Cherokee,    "Cherokee",     primary: None,
    Tagalog,     "Tagalog",      primary: None,
    Mongolian,   "Mongolian",    primary: None,
    Hiragana,    "Hiragana",     primary: Some("ja"),
    Katakana,    "Katakana",     primary: Some("ja"),
    Cjk,         "CJK",          primary: Some("zh"),
    Arabic,      "Arabic",       primary: Some("ar"),
    Hebrew,      "Hebrew",       primary: Some("he"),
    Cyrillic,    "Cyrillic",     primary: Some("ru"),
    Greek,       "Greek",        primary: Some("el"),
    Armenian,    "Armenian",     primary: Some("hy"),
    Ethiopic,    "Ethiopic",     primary: Some("am"),
    Khmer,       "Khmer",        primary: Some("km"),
    OlChiki,     "Ol Chiki",     primary: Some("sat"),
    // Registry-only: Arabic-derived orthographies share the Arabic block.
    PersoArabic, "Perso-Arabic", primary: None,
}

/// Ordered codepoint table. The first range containing a codepoint wins, and when two
/// scripts tie on count the one appearing first here is chosen.
pub static SCRIPT_RANGES: &[(u32, u32, Script)] = &[
    (0x0041, 0x007A, Script::Latin),
    (0x00C0, 0x024F, Script::Latin),
    (0x0900, 0x097F, Script::Devanagari),
    (0x0980, 0x09FF, Script::Bengali),
    (0x0A00, 0x0A7F, Script::Gurmukhi),
    (0x0A80, 0x0AFF, Script::Gujarati),
    (0x0B00, 0x0B7F, Script::Odia),
    (0x0B80, 0x0BFF, Script::Tamil),
    (0x0C00, 0x0C7F, Script::Telugu),
    (0x0C80, 0x0CFF, Script::Kannada),
    (0x0D00, 0x0D7F, Script::Malayalam),
    (0x0D80, 0x0DFF, Script::Sinhala),
    (0x0E00, 0x0E7F, Script::Thai),
    (0x0E80, 0x0EFF, Script::Lao),
    (0x0F00, 0x0FFF, Script::Tibetan),
    (0x1000, 0x109F, Script::Myanmar),
    (0x10A0, 0x10FF, Script::Georgian),
    (0x1100, 0x11FF, Script::Hangul),
    (0xAC00, 0xD7AF, Script::Hangul),
    (0x13A0, 0x13FF, Script::Cherokee),
    (0x1700, 0x171F, Script::Tagalog),
    (0x1800, 0x18AF, Script::Mongolian),
    (0x3040, 0x309F, Script::Hiragana),
    (0x30A0, 0x30FF, Script::Katakana),
    (0x3400, 0x4DBF, Script::Cjk),
    (0x4E00, 0x9FFF, Script::Cjk),
    (0x0600, 0x06FF, Script::Arabic),
    (0x0590, 0x05FF, Script::Hebrew),
    (0x0400, 0x04FF, Script::Cyrillic),
    (0x0370, 0x03FF, Script::Greek),
    (0x0530, 0x058F, Script::Armenian),
    (0x1200, 0x137F, Script::Ethiopic),
    (0x1780, 0x17FF, Script::Khmer),
    (0x1C50, 0x1C7F, Script::OlChiki),
];

impl Script {
    /// Case-insensitive lookup by display name (`"devanagari"`, `"CJK"`, `"ol chiki"`).
    pub fn from_name(name: &str) -> Option<Script> {
        let name = name.trim();
        if name.eq_ignore_ascii_case(Script::Unknown.name()) {
            return Some(Script::Unknown);
        }
        Script::ALL
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// Scripts written without inter-word spacing: tokenized one character at a time.
    #[inline(always)]
    pub const fn is_unsegmented(self) -> bool {
        matches!(self, Script::Cjk | Script::Hiragana | Script::Katakana)
    }

    /// Whether [`SCRIPT_RANGES`] can ever attribute a character to this script.
    pub fn has_ranges(self) -> bool {
        SCRIPT_RANGES.iter().any(|&(_, _, s)| s == self)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Script {
    type Err = PolytextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Script::from_name(s).ok_or_else(|| PolytextError::UnknownScript(s.to_string()))
    }
}

impl Serialize for Script {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Script {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Script of a single character, or `None` when no range contains it.
#[inline]
pub fn script_of(c: char) -> Option<Script> {
    let cp = c as u32;
    SCRIPT_RANGES
        .iter()
        .find(|&&(start, end, _)| start <= cp && cp <= end)
        .map(|&(_, _, script)| script)
}

/// Dominant script of `text` by character count.
///
/// Characters outside every range are ignored; if none matched the result is
/// [`Script::Unknown`]. Ties resolve to the script appearing first in [`SCRIPT_RANGES`].
pub fn detect_script(text: &str) -> Script {
    let mut counts = [0usize; Script::ALL.len()];
    for c in text.chars() {
        if let Some(script) = script_of(c) {
            counts[script as usize] += 1;
        }
    }

    let mut best = Script::Unknown;
    let mut best_count = 0;
    for &(_, _, script) in SCRIPT_RANGES {
        let n = counts[script as usize];
        if n > best_count {
            best = script;
            best_count = n;
        }
    }
    best
}
