use crate::{context::Context, stage::Stage};
use memchr::memmem;
use std::borrow::Cow;

/// Cap runs of `\n` at two, keeping paragraph breaks while dropping extra blank lines.
pub struct CollapseNewlines;

impl Stage for CollapseNewlines {
    fn name(&self) -> &'static str {
        "collapse_newlines"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Context) -> bool {
        memmem::find(text.as_bytes(), b"\n\n\n").is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        let mut run = 0usize;
        for c in text.chars() {
            if c == '\n' {
                run += 1;
                if run <= 2 {
                    out.push('\n');
                }
            } else {
                run = 0;
                out.push(c);
            }
        }
        Cow::Owned(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_newline_runs_at_two() {
        let c = Context::default();
        assert_eq!(CollapseNewlines.apply(Cow::Borrowed("a\n\n\n\n\nb"), &c), "a\n\nb");
        assert_eq!(CollapseNewlines.apply(Cow::Borrowed("a\n\n\nb\n\n\n"), &c), "a\n\nb\n\n");
    }

    #[test]
    fn short_runs_untouched() {
        let c = Context::default();
        for text in ["a\nb", "a\n\nb", "a\n \n \nb", "a\r\n\r\n\r\nb"] {
            assert!(!CollapseNewlines.needs_apply(text, &c), "{text:?}");
            assert_eq!(CollapseNewlines.apply(Cow::Borrowed(text), &c), text);
        }
    }
}
