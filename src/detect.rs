//! Language identification from script and marker-word evidence.
//!
//! Non-Latin scripts with a deterministic language produce exactly one candidate at
//! [`SCRIPT_CERTAIN`] confidence, whatever `top_k` asks for: the script is certain, the
//! language among its users is not, and no further candidates are invented.
//!
//! Latin text (and text in a script with no deterministic language) is scored against small
//! marker-word lists. Scores are normalized to sum to 1.0 over the languages that scored.
//! With no marker hit at all the result is English at [`NO_SIGNAL`].
use crate::{
    error::{PolytextError, Result},
    lang::{DEFAULT_LANG, LanguageEntry, LanguageRegistry},
    script::detect_script,
    unicode::is_word_char,
};
use phf::{Set, phf_set};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::{collections::HashSet, sync::Arc};

/// Script-certain, language-ambiguous.
pub const SCRIPT_CERTAIN: f64 = 0.90;
/// Floor returned when the text carries no usable signal.
pub const NO_SIGNAL: f64 = 0.30;

/// High-frequency function words per Latin-script language, in scoring order.
static LATIN_MARKERS: &[(&str, Set<&'static str>)] = &[
    ("en", phf_set! { "the", "and", "is", "are", "was", "of", "in", "to" }),
    ("es", phf_set! { "el", "la", "los", "las", "de", "en", "que", "es" }),
    ("fr", phf_set! { "le", "la", "les", "de", "du", "et", "est", "une" }),
    ("de", phf_set! { "der", "die", "das", "und", "ist", "ich", "ein", "nicht" }),
    ("pt", phf_set! { "o", "a", "os", "as", "de", "e", "do", "da" }),
];

/// One candidate language for a text, with a confidence in `[0.0, 1.0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DetectionRecord")]
pub struct DetectionResult {
    pub text: String,
    pub language: LanguageEntry,
    confidence: f64,
}

#[derive(Deserialize)]
struct DetectionRecord {
    text: String,
    language: LanguageEntry,
    confidence: f64,
}

impl TryFrom<DetectionRecord> for DetectionResult {
    type Error = PolytextError;

    fn try_from(r: DetectionRecord) -> Result<Self> {
        Self::new(r.text, r.language, r.confidence)
    }
}

impl DetectionResult {
    /// Fails with [`PolytextError::InvalidConfidence`] for values outside `[0.0, 1.0]` or NaN.
    pub fn new(text: impl Into<String>, language: LanguageEntry, confidence: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(PolytextError::InvalidConfidence(confidence));
        }
        Ok(Self {
            text: text.into(),
            language,
            confidence,
        })
    }

    // Internal constructor for confidences computed by the detector itself.
    fn scored(text: &str, language: LanguageEntry, confidence: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&confidence));
        Self {
            text: text.to_string(),
            language,
            confidence,
        }
    }

    #[inline(always)]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

#[derive(Debug, Clone)]
pub struct LanguageDetector {
    registry: Arc<LanguageRegistry>,
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new(Arc::new(LanguageRegistry::new()))
    }
}

impl LanguageDetector {
    pub fn new(registry: Arc<LanguageRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<LanguageRegistry> {
        &self.registry
    }

    /// Best candidate for `text`. Never fails; empty input yields the low-confidence fallback.
    pub fn detect(&self, text: &str) -> DetectionResult {
        self.rank(text)
            .into_iter()
            .next()
            .unwrap_or_else(|| self.fallback(text))
    }

    /// Up to `top_k` candidates by descending confidence, never padded.
    ///
    /// Ties keep registry insertion order. Scripts with a deterministic language always
    /// return a single candidate.
    pub fn detect_multiple(&self, text: &str, top_k: usize) -> Vec<DetectionResult> {
        let mut ranked = self.rank(text);
        ranked.truncate(top_k);
        ranked.into_vec()
    }

    fn rank(&self, text: &str) -> SmallVec<[DetectionResult; 5]> {
        let script = detect_script(text);

        if let Some(lang) = script
            .primary_language()
            .and_then(|code| self.registry.get(code))
        {
            tracing::debug!(script = %script, language = lang.code(), "script-certain detection");
            let mut out = SmallVec::new();
            out.push(DetectionResult::scored(text, lang, SCRIPT_CERTAIN));
            return out;
        }

        let ranked = self.score_latin(text);
        tracing::debug!(
            script = %script,
            candidates = ranked.len(),
            "marker-word detection"
        );
        if ranked.is_empty() {
            let mut out = SmallVec::new();
            out.push(self.fallback(text));
            return out;
        }
        ranked
    }

    fn score_latin(&self, text: &str) -> SmallVec<[DetectionResult; 5]> {
        let lowered = text.to_lowercase();
        let words: HashSet<&str> = lowered
            .split(|c: char| !is_word_char(c))
            .filter(|w| !w.is_empty())
            .collect();

        // (hits, registry position, entry)
        let mut scored: SmallVec<[(usize, usize, LanguageEntry); 5]> = LATIN_MARKERS
            .iter()
            .filter_map(|(code, markers)| {
                let hits = markers.iter().filter(|m| words.contains(*m)).count();
                if hits == 0 {
                    return None;
                }
                let lang = self.registry.get(code)?;
                let pos = self.registry.position(code).unwrap_or(usize::MAX);
                Some((hits, pos, lang))
            })
            .collect();

        let total: usize = scored.iter().map(|(hits, ..)| hits).sum();
        if total == 0 {
            return SmallVec::new();
        }

        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        scored
            .into_iter()
            .map(|(hits, _, lang)| {
                DetectionResult::scored(text, lang, hits as f64 / total as f64)
            })
            .collect()
    }

    fn fallback(&self, text: &str) -> DetectionResult {
        let lang = self
            .registry
            .get(DEFAULT_LANG.code())
            .unwrap_or(DEFAULT_LANG);
        DetectionResult::scored(text, lang, NO_SIGNAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> LanguageDetector {
        LanguageDetector::default()
    }

    #[test]
    fn english_prose() {
        let r = detector().detect("The quick brown fox jumps over the lazy dog");
        assert_eq!(r.language.code(), "en");
        assert_eq!(r.text, "The quick brown fox jumps over the lazy dog");
        assert!((0.0..=1.0).contains(&r.confidence()));
    }

    #[test]
    fn script_certain_languages() {
        let d = detector();
        for (text, code) in [
            ("नमस्ते दुनिया", "hi"),
            ("مرحبا بالعالم", "ar"),
            ("你好世界", "zh"),
            ("Привет мир", "ru"),
            ("안녕하세요", "ko"),
            ("こんにちは", "ja"),
        ] {
            let r = d.detect(text);
            assert_eq!(r.language.code(), code, "input: {text}");
            assert_eq!(r.confidence(), SCRIPT_CERTAIN);
        }
    }

    #[test]
    fn script_certain_returns_one_candidate_regardless_of_top_k() {
        let results = detector().detect_multiple("नमस्ते दुनिया", 5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].language.code(), "hi");
    }

    #[test]
    fn empty_and_punctuation_fall_back() {
        let d = detector();
        for text in ["", "   ", "!@#$%", "12345"] {
            let results = d.detect_multiple(text, 3);
            assert_eq!(results.len(), 1, "input: {text:?}");
            assert_eq!(results[0].language.code(), "en");
            assert_eq!(results[0].confidence(), NO_SIGNAL);
        }
    }

    #[test]
    fn latin_without_markers_falls_back() {
        let r = detector().detect("Hello world");
        assert_eq!(r.language.code(), "en");
        assert_eq!(r.confidence(), NO_SIGNAL);
    }

    #[test]
    fn scored_candidates_sum_to_one_and_are_sorted() {
        let results = detector().detect_multiple("el perro y la casa de los abuelos que es", 5);
        assert_eq!(results[0].language.code(), "es");
        let sum: f64 = results.iter().map(|r| r.confidence()).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(
            results
                .windows(2)
                .all(|w| w[0].confidence() >= w[1].confidence())
        );
    }

    #[test]
    fn ties_follow_registry_order() {
        // "de" is a marker for es, fr and pt: three-way tie, registry order es < fr < pt.
        let results = detector().detect_multiple("de", 5);
        let codes: Vec<&str> = results.iter().map(|r| r.language.code()).collect();
        assert_eq!(codes, ["es", "fr", "pt"]);
    }

    #[test]
    fn top_k_never_pads() {
        let results = detector().detect_multiple("der Hund und die Katze", 10);
        assert!(results.len() <= LATIN_MARKERS.len());
        assert_eq!(results[0].language.code(), "de");
        assert!(detector().detect_multiple("der Hund", 0).is_empty());
    }

    #[test]
    fn markers_match_case_insensitively_as_whole_words() {
        let d = detector();
        assert_eq!(d.detect("THE END AND THE START").language.code(), "en");
        // "theory" contains "the" but is not the word "the"
        assert_eq!(d.detect("theory").confidence(), NO_SIGNAL);
    }

    #[test]
    fn confidence_is_validated_not_clamped() {
        assert!(DetectionResult::new("x", DEFAULT_LANG, 1.2).is_err());
        assert!(DetectionResult::new("x", DEFAULT_LANG, -0.1).is_err());
        assert!(DetectionResult::new("x", DEFAULT_LANG, f64::NAN).is_err());
        assert!(DetectionResult::new("x", DEFAULT_LANG, 1.0).is_ok());

        let bad = r#"{"text":"x","language":{"code":"en","name":"English","script":"Latin","family":"Germanic"},"confidence":2.0}"#;
        assert!(serde_json::from_str::<DetectionResult>(bad).is_err());
    }

    #[test]
    fn result_serializes_with_stable_field_names() {
        let r = detector().detect("नमस्ते");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["text"], "नमस्ते");
        assert_eq!(json["language"]["code"], "hi");
        assert_eq!(json["confidence"], 0.9);
        let back: DetectionResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, r);
    }
}
