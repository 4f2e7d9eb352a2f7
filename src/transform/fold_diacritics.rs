//! Diacritic folding as a transform.

use crate::{
    context::Context,
    diacritic,
    transform::{Transform, TransformError},
};
use std::borrow::Cow;

/// Replace accented Latin-1 letters with their ASCII base letter.
///
/// Only defined for ASCII + Latin-1-supplement input; see
/// [`diacritic::fold_utf8`] for the exact scan rules.
pub struct FoldDiacritics;

impl Transform for FoldDiacritics {
    fn name(&self) -> &'static str {
        "fold_diacritics"
    }

    fn needs_apply(&self, input: &[u8], _: &Context) -> Result<bool, TransformError> {
        // Anything that could start a two-byte sequence is worth a real scan.
        Ok(input.iter().any(|&b| b & 0xC0 == 0xC0))
    }

    fn apply<'a>(
        &self,
        input: Cow<'a, [u8]>,
        _ctx: &Context,
    ) -> Result<Cow<'a, [u8]>, TransformError> {
        let folded = diacritic::fold_utf8(&input);
        if folded == *input {
            return Ok(input);
        }
        Ok(Cow::Owned(folded))
    }
}
