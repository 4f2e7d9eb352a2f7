pub mod case;
pub mod context;
pub mod diacritic;
pub mod engine;
pub mod han;
pub mod lang;
pub mod percent;
pub mod process;
pub mod profile;
pub mod registry;
pub mod transform;
pub mod utf8;
pub mod wide;

pub use context::Context;
pub use engine::Bytenorm;
pub use lang::Lang;
pub use percent::HexPolicy;
pub use registry::{LanguageCache, Registry};
pub use transform::fold_diacritics::FoldDiacritics;
pub use transform::lower_case::LowerCase;
pub use transform::percent_decode::PercentDecode;
pub use transform::percent_encode::PercentEncode;
pub use transform::simplify_han::SimplifyHan;
pub use transform::trim::Trim;
