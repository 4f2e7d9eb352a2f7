//! Percent-encoding as a transform.

use crate::{
    context::Context,
    percent,
    transform::{Transform, TransformError},
};
use std::borrow::Cow;

/// Escape reserved and high-bit bytes as `%XX` with uppercase hex digits.
pub struct PercentEncode;

impl Transform for PercentEncode {
    fn name(&self) -> &'static str {
        "percent_encode"
    }

    fn needs_apply(&self, input: &[u8], _: &Context) -> Result<bool, TransformError> {
        Ok(input
            .iter()
            .any(|&b| matches!(b, b' ' | b'<' | b'>' | b'"' | b'#' | b'%') || b > 0x7F))
    }

    fn apply<'a>(
        &self,
        input: Cow<'a, [u8]>,
        ctx: &Context,
    ) -> Result<Cow<'a, [u8]>, TransformError> {
        if !self.needs_apply(&input, ctx)? {
            return Ok(input);
        }
        Ok(Cow::Owned(percent::encode(&input)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_reserved_bytes() {
        let ctx = Context::default();
        let out = PercentEncode
            .apply(Cow::Borrowed(b" <hi>".as_ref()), &ctx)
            .unwrap();
        assert_eq!(out.as_ref(), b"%20%3Chi%3E");
    }

    #[test]
    fn clean_input_is_zero_copy() {
        let ctx = Context::default();
        let input: &[u8] = b"Main_Page";
        let out = PercentEncode.apply(Cow::Borrowed(input), &ctx).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
    }
}
