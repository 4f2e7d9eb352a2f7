//! Percent-decoding as a transform.
//!
//! The only fallible transform in the crate, and only under
//! [`HexPolicy::Strict`](crate::percent::HexPolicy::Strict).

use crate::{
    context::Context,
    percent,
    transform::{Transform, TransformError},
};
use memchr::memchr;
use std::borrow::Cow;

/// Decode `%XX` escapes according to the context's hex policy.
pub struct PercentDecode;

impl Transform for PercentDecode {
    fn name(&self) -> &'static str {
        "percent_decode"
    }

    fn needs_apply(&self, input: &[u8], _: &Context) -> Result<bool, TransformError> {
        Ok(memchr(b'%', input).is_some())
    }

    fn apply<'a>(
        &self,
        input: Cow<'a, [u8]>,
        ctx: &Context,
    ) -> Result<Cow<'a, [u8]>, TransformError> {
        if memchr(b'%', &input).is_none() {
            return Ok(input);
        }
        let decoded = percent::decode(&input, ctx.hex_policy)
            .map_err(|e| TransformError::Validation(self.name(), e.to_string()))?;
        if decoded == *input {
            return Ok(input);
        }
        Ok(Cow::Owned(decoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::percent::HexPolicy;

    #[test]
    fn decodes_escapes() {
        let ctx = Context::default();
        let out = PercentDecode
            .apply(Cow::Borrowed(b"%41%42".as_ref()), &ctx)
            .unwrap();
        assert_eq!(out.as_ref(), b"AB");
    }

    #[test]
    fn clean_input_is_zero_copy() {
        let ctx = Context::default();
        let input: &[u8] = b"no escapes here";
        assert!(!PercentDecode.needs_apply(input, &ctx).unwrap());
        let out = PercentDecode.apply(Cow::Borrowed(input), &ctx).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn permissive_never_fails() {
        let ctx = Context::new(HexPolicy::Permissive);
        assert!(
            PercentDecode
                .apply(Cow::Borrowed(b"%XY".as_ref()), &ctx)
                .is_ok()
        );
    }

    #[test]
    fn strict_surfaces_validation_error() {
        let ctx = Context::new(HexPolicy::Strict);
        let err = PercentDecode
            .apply(Cow::Borrowed(b"%XY".as_ref()), &ctx)
            .unwrap_err();
        assert!(matches!(err, TransformError::Validation("percent_decode", _)));
    }
}
