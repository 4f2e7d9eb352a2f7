//! Traditional → simplified Chinese transliteration as a transform.

use crate::{
    context::Context,
    han,
    transform::{Transform, TransformError},
};
use std::borrow::Cow;

/// Rewrite traditional ideographs to their simplified forms.
pub struct SimplifyHan;

impl Transform for SimplifyHan {
    fn name(&self) -> &'static str {
        "simplify_han"
    }

    fn needs_apply(&self, input: &[u8], _: &Context) -> Result<bool, TransformError> {
        // Cheap gate first: no candidate lead byte, no work. The table scan
        // only runs when one is present.
        if !input.iter().any(|&b| han::is_candidate_lead(b)) {
            return Ok(false);
        }
        Ok(han::would_convert(input))
    }

    fn apply<'a>(
        &self,
        input: Cow<'a, [u8]>,
        ctx: &Context,
    ) -> Result<Cow<'a, [u8]>, TransformError> {
        if !self.needs_apply(&input, ctx)? {
            return Ok(input);
        }
        Ok(Cow::Owned(han::convert(&input)))
    }
}
