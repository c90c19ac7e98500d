//! Process abstraction
//! ChainedProcess is monomorphised: the compiler knows the concrete type of every stage and
//! can inline the whole chain. Stages are applied in the order they were added.
use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}

pub struct EmptyProcess;
impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
        text
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let current = self.previous.process(text, ctx);
        if !self.stage.needs_apply(&current, ctx) {
            return current;
        }
        tracing::trace!(stage = self.stage.name(), "applying stage");
        self.stage.apply(current, ctx)
    }
}

/// Builds a [`ChainedProcess`] one stage at a time.
pub struct ProcessBuilder<P: Process> {
    current: P,
}

impl ProcessBuilder<EmptyProcess> {
    pub fn new() -> Self {
        Self {
            current: EmptyProcess,
        }
    }
}

impl Default for ProcessBuilder<EmptyProcess> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Process> ProcessBuilder<P> {
    pub fn add_stage<S: Stage>(self, stage: S) -> ProcessBuilder<ChainedProcess<S, P>> {
        ProcessBuilder {
            current: ChainedProcess {
                stage,
                previous: self.current,
            },
        }
    }

    pub fn build(self) -> P {
        self.current
    }
}
