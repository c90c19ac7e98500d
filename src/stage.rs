//! Core normalization stage abstraction.
//!
//! A stage is one fixed rewrite of the text. [`needs_apply`](Stage::needs_apply) is a cheap
//! pre-check that lets clean input flow through the whole chain without allocating;
//! [`apply`](Stage::apply) returns the input unchanged (still borrowed) whenever it can.
//! Stages never fail: every rule has a well-defined output for any input.

pub mod collapse_newlines;
pub mod collapse_spaces;
pub mod normalization;
pub mod strip_invisible;
pub mod trim;
pub mod unify_nasalization;

use crate::context::Context;
use std::borrow::Cow;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in trace events.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool;

    /// Allocation-aware transformation. Must be correct even when `needs_apply` was not
    /// consulted.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}
