// src/context.rs
// Per-run configuration handed to every transform. Deliberately tiny and Copy.

use crate::percent::HexPolicy;

/// Runtime context passed to every transform.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context {
    /// How percent-decoding treats non-hex digits after `%`.
    pub hex_policy: HexPolicy,
}

impl Context {
    #[inline]
    pub fn new(hex_policy: HexPolicy) -> Self {
        Self { hex_policy }
    }
}
