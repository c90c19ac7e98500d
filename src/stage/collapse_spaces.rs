use crate::{context::Context, stage::Stage, unicode::is_horizontal_space};
use memchr::{memchr, memmem};
use std::borrow::Cow;

/// Fold every run of spaces and tabs into a single ASCII space.
///
/// A lone tab counts as a run. Other whitespace (newlines, NBSP, ideographic space) is left
/// alone.
pub struct CollapseSpaces;

impl Stage for CollapseSpaces {
    fn name(&self) -> &'static str {
        "collapse_spaces"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Context) -> bool {
        let bytes = text.as_bytes();
        memchr(b'\t', bytes).is_some() || memmem::find(bytes, b"  ").is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        let mut in_run = false;
        for c in text.chars() {
            if is_horizontal_space(c) {
                if !in_run {
                    out.push(' ');
                }
                in_run = true;
            } else {
                out.push(c);
                in_run = false;
            }
        }
        Cow::Owned(out)
    }
}
