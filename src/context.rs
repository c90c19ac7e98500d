// src/context.rs
// Per-call data handed to every normalization stage.

use crate::{lang::LanguageEntry, script::Script};

/// Runtime context passed to every normalization stage.
///
/// `language` is `None` when the caller's code is not registered; stages then apply only
/// their script-independent rules.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub language: Option<LanguageEntry>,
}

impl Context {
    #[inline(always)]
    pub fn new(language: Option<LanguageEntry>) -> Self {
        Self { language }
    }

    /// Script of the resolved language, if any.
    #[inline(always)]
    pub fn script(&self) -> Option<Script> {
        self.language.as_ref().map(|l| l.script)
    }
}
