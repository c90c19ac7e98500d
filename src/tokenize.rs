//! Script-aware tokenization.
//!
//! The strategy is chosen from the script of the resolved language: scripts written without
//! inter-word spacing are split one character per token, everything else on whitespace and
//! zero-width boundaries followed by word/non-word class transitions.
use crate::{
    detect::LanguageDetector,
    error::Result,
    lang::{LanguageEntry, LanguageRegistry},
    script::{Script, detect_script},
    unicode::{is_apostrophe, is_token_separator, is_word_char},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizationResult {
    pub text: String,
    pub tokens: Vec<String>,
    pub language: LanguageEntry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStrategy {
    /// One token per non-separator character.
    PerCharacter,
    /// Separator split, then word/non-word transitions.
    WordBoundary,
}

impl TokenStrategy {
    #[inline(always)]
    pub const fn for_script(script: Script) -> Self {
        if script.is_unsegmented() {
            Self::PerCharacter
        } else {
            Self::WordBoundary
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::PerCharacter => "per-character",
            Self::WordBoundary => "word-boundary",
        }
    }

    pub fn split(self, text: &str) -> Vec<String> {
        match self {
            Self::PerCharacter => text
                .chars()
                .filter(|&c| !is_token_separator(c))
                .map(String::from)
                .collect(),
            Self::WordBoundary => {
                let mut out = Vec::new();
                for span in text.split(is_token_separator).filter(|s| !s.is_empty()) {
                    split_classes(span, &mut out);
                }
                out
            }
        }
    }
}

/// Word character, or an apostrophe with word characters on both sides.
#[inline]
fn joins_word(prev_is_word: bool, c: char, rest: &str) -> bool {
    if is_word_char(c) {
        return true;
    }
    prev_is_word && is_apostrophe(c) && rest.chars().next().is_some_and(is_word_char)
}

fn split_classes(span: &str, out: &mut Vec<String>) {
    let mut start = 0;
    let mut prev: Option<bool> = None;
    for (i, c) in span.char_indices() {
        let word = joins_word(prev == Some(true), c, &span[i + c.len_utf8()..]);
        if prev.is_some_and(|p| p != word) {
            out.push(span[start..i].to_string());
            start = i;
        }
        prev = Some(word);
    }
    if start < span.len() {
        out.push(span[start..].to_string());
    }
}

#[derive(Debug, Clone)]
pub struct Tokenizer {
    registry: Arc<LanguageRegistry>,
    detector: LanguageDetector,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(Arc::new(LanguageRegistry::new()))
    }
}

impl Tokenizer {
    pub fn new(registry: Arc<LanguageRegistry>) -> Self {
        Self {
            detector: LanguageDetector::new(Arc::clone(&registry)),
            registry,
        }
    }

    /// Split `text` into tokens tagged with the resolved language.
    ///
    /// An explicit `language` must be registered, otherwise this fails with
    /// [`UnknownLanguage`](crate::PolytextError::UnknownLanguage). Without one the best
    /// detection candidate is used.
    pub fn tokenize(&self, text: &str, language: Option<&str>) -> Result<TokenizationResult> {
        let language = match language {
            Some(code) => self.registry.lookup(code)?,
            None => self.detector.detect(text).language,
        };

        // Registry-only scripts have no ranges to reason about: classify the text itself.
        let script = if language.script.has_ranges() {
            language.script
        } else {
            detect_script(text)
        };

        let strategy = TokenStrategy::for_script(script);
        let tokens = strategy.split(text);
        tracing::debug!(
            language = language.code(),
            script = %script,
            strategy = strategy.name(),
            tokens = tokens.len(),
            "tokenized"
        );

        Ok(TokenizationResult {
            text: text.to_string(),
            tokens,
            language,
        })
    }
}
