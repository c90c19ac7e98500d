use crate::{
    detect::{DetectionResult, LanguageDetector},
    error::Result,
    lang::{LanguageEntry, LanguageRegistry},
    normalize::TextNormalizer,
    tokenize::{TokenizationResult, Tokenizer},
    transliterate::{TransliterationResult, Transliterator},
};
use std::sync::Arc;

/// Candidate count used by [`Polytext::detect_multiple_default`] unless configured.
pub const DEFAULT_TOP_K: usize = 3;

/// All four components over one shared [`LanguageRegistry`].
#[derive(Debug, Clone)]
pub struct Polytext {
    registry: Arc<LanguageRegistry>,
    detector: LanguageDetector,
    tokenizer: Tokenizer,
    transliterator: Transliterator,
    normalizer: TextNormalizer,
    top_k: usize,
}

impl Default for Polytext {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Polytext {
    pub fn builder() -> PolytextBuilder {
        PolytextBuilder::default()
    }

    pub fn registry(&self) -> &Arc<LanguageRegistry> {
        &self.registry
    }

    pub fn detect(&self, text: &str) -> DetectionResult {
        self.detector.detect(text)
    }

    pub fn detect_multiple(&self, text: &str, top_k: usize) -> Vec<DetectionResult> {
        self.detector.detect_multiple(text, top_k)
    }

    /// [`detect_multiple`](Self::detect_multiple) with the configured candidate count.
    pub fn detect_multiple_default(&self, text: &str) -> Vec<DetectionResult> {
        self.detector.detect_multiple(text, self.top_k)
    }

    pub fn tokenize(&self, text: &str, language: Option<&str>) -> Result<TokenizationResult> {
        self.tokenizer.tokenize(text, language)
    }

    pub fn transliterate(
        &self,
        text: &str,
        source_script: &str,
        target_script: &str,
    ) -> Result<TransliterationResult> {
        self.transliterator
            .transliterate(text, source_script, target_script)
    }

    pub fn normalize(&self, text: &str, language: &str) -> String {
        self.normalizer.normalize(text, language)
    }
}

pub struct PolytextBuilder {
    registry: Option<Arc<LanguageRegistry>>,
    languages: Vec<LanguageEntry>,
    top_k: usize,
}

impl Default for PolytextBuilder {
    fn default() -> Self {
        Self {
            registry: None,
            languages: Vec::new(),
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl PolytextBuilder {
    /// Share an existing registry instead of creating one with the built-ins.
    pub fn registry(mut self, registry: Arc<LanguageRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Insert (or replace) a language when the facade is built.
    pub fn language(mut self, entry: LanguageEntry) -> Self {
        self.languages.push(entry);
        self
    }

    pub fn top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn build(self) -> Polytext {
        let registry = self
            .registry
            .unwrap_or_else(|| Arc::new(LanguageRegistry::new()));
        if !self.languages.is_empty() {
            registry.extend(self.languages);
        }
        Polytext {
            detector: LanguageDetector::new(Arc::clone(&registry)),
            tokenizer: Tokenizer::new(Arc::clone(&registry)),
            transliterator: Transliterator::new(),
            normalizer: TextNormalizer::new(Arc::clone(&registry)),
            registry,
            top_k: self.top_k,
        }
    }
}
