//! Fixed-order text normalization.
//!
//! 1. NFC
//! 2. space/tab runs → one space
//! 3. three or more `\n` → two
//! 4. trim
//! 5. delete ZWSP, WJ, BOM, NBSP (never ZWJ/ZWNJ)
//! 6. Devanagari only: chandrabindu → anusvara
//!
//! Step 5 can expose new work for steps 1–4 (a deleted ZWSP between a base and a combining
//! mark, an NBSP between two spaces, a BOM in front of leading whitespace). When it removed
//! anything, steps 1–4 run once more, so the result is always a fixed point.
use crate::{
    context::Context,
    lang::LanguageRegistry,
    process::{Process, ProcessBuilder},
    stage::{
        Stage, collapse_newlines::CollapseNewlines, collapse_spaces::CollapseSpaces,
        normalization::NFC, strip_invisible::StripInvisible, trim::Trim,
        unify_nasalization::UnifyNasalization,
    },
};
use std::{borrow::Cow, sync::Arc};

/// Steps 1–4.
fn canonical() -> impl Process {
    ProcessBuilder::new()
        .add_stage(NFC)
        .add_stage(CollapseSpaces)
        .add_stage(CollapseNewlines)
        .add_stage(Trim)
        .build()
}

#[derive(Debug, Clone)]
pub struct TextNormalizer {
    registry: Arc<LanguageRegistry>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(Arc::new(LanguageRegistry::new()))
    }
}

impl TextNormalizer {
    pub fn new(registry: Arc<LanguageRegistry>) -> Self {
        Self { registry }
    }

    /// Normalize `text` under the rules for `language`.
    ///
    /// Never fails: an unregistered code gets the script-independent steps only.
    pub fn normalize(&self, text: &str, language: &str) -> String {
        let entry = self.registry.get(language);
        if entry.is_none() {
            tracing::debug!(language, "unregistered language, generic rules only");
        }
        let ctx = Context::new(entry);
        self.normalize_with(Cow::Borrowed(text), &ctx).into_owned()
    }

    /// The pipeline over an already resolved context. Returns the input borrowed when
    /// nothing changed.
    pub fn normalize_with<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let canonical = canonical();
        let mut text = canonical.process(text, ctx);

        if StripInvisible.needs_apply(&text, ctx) {
            text = canonical.process(StripInvisible.apply(text, ctx), ctx);
        }

        if UnifyNasalization.needs_apply(&text, ctx) {
            text = UnifyNasalization.apply(text, ctx);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(text: &str, lang: &str) -> String {
        TextNormalizer::default().normalize(text, lang)
    }

    #[test]
    fn hindi_example() {
        assert_eq!(normalize("नमस्ते   दुनिया\u{200B}", "hi"), "नमस्ते दुनिया");
    }

    #[test]
    fn whitespace_rules() {
        assert_eq!(normalize("  a \t b  ", "en"), "a b");
        assert_eq!(normalize("para one\n\n\n\npara two", "en"), "para one\n\npara two");
        assert_eq!(normalize("\n\n\n", "en"), "");
        assert_eq!(normalize("", "en"), "");
    }

    #[test]
    fn composes_to_nfc() {
        assert_eq!(normalize("cafe\u{0301}", "fr"), "café");
        assert_eq!(normalize("café", "fr"), normalize("cafe\u{0301}", "fr"));
    }

    #[test]
    fn chandrabindu_only_for_devanagari() {
        assert_eq!(normalize("हूँ", "hi"), "हूं");
        assert_eq!(normalize("हूँ", "mr"), "हूं");
        assert_eq!(normalize("হুঁ", "bn"), "হুঁ");
        assert_eq!(normalize("हूँ", "en"), "हूँ");
    }

    #[test]
    fn unknown_language_degrades_to_generic_rules() {
        assert_eq!(normalize("  हूँ\u{FEFF} ", "xx-unknown"), "हूँ");
    }

    #[test]
    fn joiners_are_preserved() {
        let text = "क्\u{200D}ष\u{200B} र्\u{200C}य";
        let out = normalize(text, "hi");
        assert_eq!(out, "क्\u{200D}ष र्\u{200C}य");
    }

    #[test]
    fn removal_that_exposes_work_is_finished_in_one_call() {
        // ZWSP between base and combining mark
        assert_eq!(normalize("e\u{200B}\u{0301}", "en"), "é");
        // NBSP between spaces
        assert_eq!(normalize("a \u{00A0} b", "en"), "a b");
        // BOM shielding leading whitespace
        assert_eq!(normalize("\u{FEFF} \u{3000}text", "en"), "text");
        for s in ["e\u{200B}\u{0301}", "a \u{00A0} b", "\u{FEFF} \u{3000}text"] {
            let once = normalize(s, "en");
            assert_eq!(normalize(&once, "en"), once);
        }
    }

    #[test]
    fn clean_input_is_not_copied() {
        let n = TextNormalizer::default();
        let ctx = Context::default();
        assert!(matches!(
            n.normalize_with(Cow::Borrowed("already clean"), &ctx),
            Cow::Borrowed(_)
        ));
    }
}
