//! Core transform abstraction.
//!
//! A transform is one rewriting step over a byte string. The contract mirrors
//! the two-phase shape used throughout the crate: `needs_apply` is a cheap
//! scan that lets a pipeline skip the step entirely, and `apply` is the
//! allocation-aware rewrite. A transform handed input it would not change
//! must return the `Cow` it was given, so chains over clean input stay
//! zero-copy end to end.
//!
//! Every transform here is total over arbitrary bytes. The one exception is
//! percent-decoding under [`HexPolicy::Strict`](crate::percent::HexPolicy),
//! which is why `apply` returns a `Result` at all.

pub mod fold_diacritics;
pub mod lower_case;
pub mod percent_decode;
pub mod percent_encode;
pub mod simplify_han;
pub mod trim;

use crate::context::Context;
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every transform.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("transform `{0}` failed: {1}")]
    Failed(&'static str, String),

    #[error("transform `{0}` rejected its input: {1}")]
    Validation(&'static str, String),
}

/// A single byte-string rewriting step.
pub trait Transform: Send + Sync {
    /// Human-readable name, used in error messages and profiles.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole transform.
    fn needs_apply(&self, input: &[u8], ctx: &Context) -> Result<bool, TransformError>;

    /// Allocation-aware rewrite. Must always be correct on its own; callers
    /// are not required to consult `needs_apply` first.
    fn apply<'a>(
        &self,
        input: Cow<'a, [u8]>,
        ctx: &Context,
    ) -> Result<Cow<'a, [u8]>, TransformError>;
}
