//! Case folding for ASCII plus the Latin-1 supplement.
//!
//! The fold is a two-band rule: ASCII lowercases normally, and the Latin-1
//! uppercase block 0xC0..0xDF shifts down by 0x20 (À→à … Þ→þ). The upper
//! bound is exclusive: 0xDF is ß, which is already lowercase. Everything
//! else passes through.

use crate::utf8;

/// Fold one raw byte.
#[inline]
pub fn fold_byte(b: u8) -> u8 {
    if b < 0x80 {
        b.to_ascii_lowercase()
    } else if (0xC0..0xDF).contains(&b) {
        b + 0x20
    } else {
        b
    }
}

/// Fold one code point with the same two-band rule.
#[inline]
pub fn fold_code_point(c: u32) -> u32 {
    if c < 0x80 {
        u32::from((c as u8).to_ascii_lowercase())
    } else if (0xC0..0xDF).contains(&c) {
        c + 0x20
    } else {
        c
    }
}

/// Element-wise fold over a raw byte string.
pub fn lower(raw: &[u8]) -> Vec<u8> {
    raw.iter().map(|&b| fold_byte(b)).collect()
}

/// Element-wise fold over a wide string.
pub fn lower_wide(wide: &[u32]) -> Vec<u32> {
    wide.iter().map(|&c| fold_code_point(c)).collect()
}

/// Fold a UTF-8 byte string: decode, fold per code point, re-encode.
pub fn lower_utf8(bytes: &[u8]) -> Vec<u8> {
    if bytes.is_empty() {
        return Vec::new();
    }
    utf8::encode(&lower_wide(&utf8::decode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_folds() {
        assert_eq!(lower(b"HELLO"), b"hello");
        assert_eq!(lower(b"MiXeD 123!"), b"mixed 123!");
    }

    #[test]
    fn latin1_band_shifts_down() {
        assert_eq!(fold_byte(0xC0), 0xE0); // À → à
        assert_eq!(fold_byte(0xDE), 0xFE); // Þ → þ
        assert_eq!(fold_byte(0xDF), 0xDF); // ß already lowercase
        assert_eq!(fold_byte(0xE9), 0xE9); // é unchanged
        assert_eq!(fold_byte(0xBF), 0xBF); // ¿ below the band
    }

    #[test]
    fn wide_fold_matches_byte_fold_below_256() {
        for b in 0..=255u8 {
            assert_eq!(fold_code_point(u32::from(b)), u32::from(fold_byte(b)));
        }
    }

    #[test]
    fn wide_fold_passes_high_code_points() {
        assert_eq!(fold_code_point(0x4E2D), 0x4E2D);
        assert_eq!(fold_code_point(0x20AC), 0x20AC);
    }

    #[test]
    fn utf8_fold_recodes() {
        assert_eq!(lower_utf8("CAFÉ".as_bytes()), "café".as_bytes());
        assert_eq!(lower_utf8(b""), b"");
        // Non-Latin text survives the decode/encode round trip untouched.
        assert_eq!(lower_utf8("中文".as_bytes()), "中文".as_bytes());
    }
}
