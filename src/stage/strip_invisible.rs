use crate::{
    context::Context,
    stage::Stage,
    unicode::{contains_removable_invisible, is_removable_invisible},
};
use std::borrow::Cow;

/// Delete ZWSP, word joiner, BOM and no-break space.
///
/// ZWJ and ZWNJ survive: they select conjunct and ligature forms in Brahmic text.
pub struct StripInvisible;

impl Stage for StripInvisible {
    fn name(&self) -> &'static str {
        "strip_invisible"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Context) -> bool {
        contains_removable_invisible(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        Cow::Owned(text.chars().filter(|&c| !is_removable_invisible(c)).collect())
    }
}
