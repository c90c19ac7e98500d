//! Table-driven transliteration between named scripts.
//!
//! Supported directions form the closed [`ScriptPair`] enumeration; names arriving from
//! callers are resolved into it case-insensitively, and anything else is rejected before any
//! text is touched.
pub mod devanagari;

use crate::{
    error::{PolytextError, Result},
    script::Script,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransliterationResult {
    pub source: String,
    pub target: String,
    /// Echoes the caller's spelling of the script name.
    pub source_script: String,
    pub target_script: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptPair {
    DevanagariToLatin,
    LatinToDevanagari,
}

impl ScriptPair {
    pub const ALL: &'static [ScriptPair] = &[Self::DevanagariToLatin, Self::LatinToDevanagari];

    pub const fn source(self) -> Script {
        match self {
            Self::DevanagariToLatin => Script::Devanagari,
            Self::LatinToDevanagari => Script::Latin,
        }
    }

    pub const fn target(self) -> Script {
        match self {
            Self::DevanagariToLatin => Script::Latin,
            Self::LatinToDevanagari => Script::Devanagari,
        }
    }

    pub fn from_scripts(source: Script, target: Script) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.source() == source && p.target() == target)
    }

    /// Resolve caller-supplied script names. Unknown names and unsupported directions both
    /// fail with [`PolytextError::UnsupportedScriptPair`].
    pub fn resolve(source: &str, target: &str) -> Result<Self> {
        Script::from_name(source)
            .zip(Script::from_name(target))
            .and_then(|(s, t)| Self::from_scripts(s, t))
            .ok_or_else(|| PolytextError::UnsupportedScriptPair {
                source_script: source.to_string(),
                target_script: target.to_string(),
                supported: Self::ALL.iter().map(ToString::to_string).collect(),
            })
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            Self::DevanagariToLatin => devanagari::to_latin(text),
            Self::LatinToDevanagari => devanagari::to_devanagari(text),
        }
    }
}

impl fmt::Display for ScriptPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source(), self.target())
    }
}

/// Stateless; holds no tables of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transliterator;

impl Transliterator {
    pub fn new() -> Self {
        Self
    }

    pub fn transliterate(
        &self,
        text: &str,
        source_script: &str,
        target_script: &str,
    ) -> Result<TransliterationResult> {
        let pair = ScriptPair::resolve(source_script, target_script)?;
        let target = pair.apply(text);
        tracing::debug!(pair = %pair, chars = text.chars().count(), "transliterated");
        Ok(TransliterationResult {
            source: text.to_string(),
            target,
            source_script: source_script.to_string(),
            target_script: target_script.to_string(),
        })
    }
}
