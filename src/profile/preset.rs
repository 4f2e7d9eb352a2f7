//! The transform chains the pack server actually runs.

use crate::{
    process::{ChainedProcess, EmptyProcess},
    profile::Profile,
    transform::{
        fold_diacritics::FoldDiacritics, lower_case::LowerCase, percent_decode::PercentDecode,
        simplify_han::SimplifyHan, trim::Trim,
    },
};

/// Article-title lookup key: trim, lowercase, strip accents.
pub fn title_key() -> Profile<
    ChainedProcess<FoldDiacritics, ChainedProcess<LowerCase, ChainedProcess<Trim, EmptyProcess>>>,
> {
    Profile::builder("title_key")
        .add_transform(Trim)
        .add_transform(LowerCase)
        .add_transform(FoldDiacritics)
        .build()
}

/// Wiki link target → title: undo the URL escaping, then trim.
pub fn link_target() -> Profile<ChainedProcess<Trim, ChainedProcess<PercentDecode, EmptyProcess>>> {
    Profile::builder("link_target")
        .add_transform(PercentDecode)
        .add_transform(Trim)
        .build()
}

/// Lookup against a simplified-Chinese pack: trim, then transliterate.
pub fn simplified_lookup() -> Profile<ChainedProcess<SimplifyHan, ChainedProcess<Trim, EmptyProcess>>>
{
    Profile::builder("simplified_lookup")
        .add_transform(Trim)
        .add_transform(SimplifyHan)
        .build()
}
