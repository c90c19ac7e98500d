use crate::{context::Context, script::Script, stage::Stage};
use memchr::memmem;
use std::borrow::Cow;

const CHANDRABINDU: char = '\u{0901}';
const ANUSVARA: &str = "\u{0902}";
// UTF-8 of U+0901
const CHANDRABINDU_UTF8: &[u8] = b"\xE0\xA4\x81";

/// Devanagari only: rewrite chandrabindu (ँ) as anusvara (ं).
///
/// A no-op for every other script and when the language is unknown.
pub struct UnifyNasalization;

impl Stage for UnifyNasalization {
    fn name(&self) -> &'static str {
        "unify_nasalization"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        ctx.script() == Some(Script::Devanagari)
            && memmem::find(text.as_bytes(), CHANDRABINDU_UTF8).is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        Cow::Owned(text.replace(CHANDRABINDU, ANUSVARA))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::data::{BEN, HIN, MAR};

    #[test]
    fn devanagari_languages_unify() {
        for lang in [HIN, MAR] {
            let c = Context::new(Some(lang));
            assert_eq!(UnifyNasalization.apply(Cow::Borrowed("हूँ माँ"), &c), "हूं मां");
        }
    }

    #[test]
    fn other_scripts_and_unknown_language_are_untouched() {
        let text = "हूँ";
        for c in [Context::new(Some(BEN)), Context::default()] {
            assert!(!UnifyNasalization.needs_apply(text, &c));
            assert_eq!(UnifyNasalization.apply(Cow::Borrowed(text), &c), text);
        }
    }

    #[test]
    fn utf8_constant_matches_char() {
        assert_eq!(CHANDRABINDU.encode_utf8(&mut [0; 4]).as_bytes(), CHANDRABINDU_UTF8);
    }
}
