use crate::{context::Context, stage::Stage};
use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};
use std::{borrow::Cow, sync::LazyLock};

// ── ICU4X ──
static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed> =
    LazyLock::new(ComposingNormalizer::new_nfc);

/// Unicode Normalization Form C (canonical decomposition, then canonical composition).
///
/// Compatibility forms are never applied: `ﬁ` and `①` survive unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct NfcStage;

pub const NFC: NfcStage = NfcStage;

impl Stage for NfcStage {
    fn name(&self) -> &'static str {
        "nfc"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
        !ICU4X_NFC.is_normalized(text)
    }

    #[inline(always)]
    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        if ICU4X_NFC.is_normalized(&text) {
            return text;
        }
        Cow::Owned(ICU4X_NFC.normalize(&text).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_decomposed_sequences() {
        let c = Context::default();
        assert_eq!(NFC.apply(Cow::Borrowed("cafe\u{0301}"), &c), "café");
        // Devanagari nukta composition: क + ़ is *excluded* from composition.
        assert_eq!(NFC.apply(Cow::Borrowed("\u{0915}\u{093C}"), &c), "\u{0915}\u{093C}");
        // ऩ (U+0929) decomposes to न + ़ and recomposes.
        assert_eq!(NFC.apply(Cow::Borrowed("\u{0928}\u{093C}"), &c), "\u{0929}");
    }

    #[test]
    fn compatibility_characters_are_untouched() {
        let c = Context::default();
        let text = "ﬁ ½ ①";
        assert!(!NFC.needs_apply(text, &c));
        assert_eq!(NFC.apply(Cow::Borrowed(text), &c), text);
    }

    #[test]
    fn normalized_input_stays_borrowed() {
        let c = Context::default();
        for text in ["", "hello world", "नमस्ते", "café"] {
            assert!(!NFC.needs_apply(text, &c));
            assert!(matches!(NFC.apply(Cow::Borrowed(text), &c), Cow::Borrowed(_)));
        }
    }

    #[test]
    fn idempotent() {
        let c = Context::default();
        let once = NFC.apply(Cow::Borrowed("e\u{0301}\u{0323} A\u{030A}"), &c);
        assert!(!NFC.needs_apply(&once, &c));
        assert_eq!(NFC.apply(once.clone(), &c), once);
    }
}
