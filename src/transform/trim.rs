//! Whitespace trimming: everything at or below 0x20 counts.

use crate::{
    context::Context,
    transform::{Transform, TransformError},
};
use std::borrow::Cow;

/// Strip units ≤ 0x20 from both ends of a byte string. Zero-copy: the result
/// is a subslice of the input.
#[inline]
pub fn trim(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b > 0x20);
    let Some(start) = start else {
        return &[];
    };
    let end = bytes.iter().rposition(|&b| b > 0x20).unwrap_or(start);
    &bytes[start..=end]
}

/// Wide-string counterpart of [`trim`].
#[inline]
pub fn trim_wide(wide: &[u32]) -> &[u32] {
    let start = wide.iter().position(|&c| c > 0x20);
    let Some(start) = start else {
        return &[];
    };
    let end = wide.iter().rposition(|&c| c > 0x20).unwrap_or(start);
    &wide[start..=end]
}

pub struct Trim;

impl Transform for Trim {
    fn name(&self) -> &'static str {
        "trim"
    }

    fn needs_apply(&self, input: &[u8], _: &Context) -> Result<bool, TransformError> {
        Ok(input.first().is_some_and(|&b| b <= 0x20) || input.last().is_some_and(|&b| b <= 0x20))
    }

    fn apply<'a>(
        &self,
        input: Cow<'a, [u8]>,
        _ctx: &Context,
    ) -> Result<Cow<'a, [u8]>, TransformError> {
        let trimmed = trim(&input);
        if trimmed.len() == input.len() {
            return Ok(input);
        }
        Ok(Cow::Owned(trimmed.to_vec()))
    }
}
