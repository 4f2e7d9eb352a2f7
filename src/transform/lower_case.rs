//! UTF-8 case folding as a transform.

use crate::{
    case,
    context::Context,
    transform::{Transform, TransformError},
};
use std::borrow::Cow;

/// Lowercase a UTF-8 byte string via the two-band fold in [`crate::case`].
pub struct LowerCase;

impl Transform for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    fn needs_apply(&self, input: &[u8], _: &Context) -> Result<bool, TransformError> {
        if input.is_empty() {
            return Ok(false);
        }
        // ASCII uppercase, or any non-ASCII byte: the latter has to go
        // through the decode/fold/encode path to find out.
        Ok(input.iter().any(|b| b.is_ascii_uppercase() || *b > 0x7F))
    }

    fn apply<'a>(
        &self,
        input: Cow<'a, [u8]>,
        _ctx: &Context,
    ) -> Result<Cow<'a, [u8]>, TransformError> {
        let lowered = case::lower_utf8(&input);
        if lowered == *input {
            return Ok(input);
        }
        Ok(Cow::Owned(lowered))
    }
}
