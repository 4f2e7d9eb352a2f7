//! Wiki language codes.
//!
//! Only display metadata lives here; which languages exist at runtime is
//! decided by the packs the [`registry`](crate::registry) finds on disk.

use phf::{Map, phf_map};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

static LANG_NAMES: Map<&'static str, &'static str> = phf_map! {
    "ar" => "Arabic",
    "bg" => "Bulgarian",
    "ca" => "Catalan",
    "cs" => "Czech",
    "da" => "Danish",
    "de" => "German",
    "el" => "Greek",
    "en" => "English",
    "eo" => "Esperanto",
    "es" => "Spanish",
    "et" => "Estonian",
    "fa" => "Persian",
    "fi" => "Finnish",
    "fr" => "French",
    "he" => "Hebrew",
    "hr" => "Croatian",
    "hu" => "Hungarian",
    "id" => "Indonesian",
    "it" => "Italian",
    "ja" => "Japanese",
    "ko" => "Korean",
    "lt" => "Lithuanian",
    "lv" => "Latvian",
    "nl" => "Dutch",
    "no" => "Norwegian",
    "pl" => "Polish",
    "pt" => "Portuguese",
    "ro" => "Romanian",
    "ru" => "Russian",
    "sk" => "Slovak",
    "sl" => "Slovenian",
    "sr" => "Serbian",
    "sv" => "Swedish",
    "th" => "Thai",
    "tr" => "Turkish",
    "uk" => "Ukrainian",
    "vi" => "Vietnamese",
    "zh" => "Chinese",
};

/// Display name for a language code, if it is one we know.
pub fn lang_name(code: &str) -> Option<&'static str> {
    LANG_NAMES.get(code).copied()
}

/// The code paired with its display name, when known.
pub fn lang(code: &str) -> Option<Lang> {
    LANG_NAMES
        .get_entry(code)
        .map(|(&code, &name)| Lang { code, name })
}
