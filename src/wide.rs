//! Legacy byte ⇄ code-point bridge.
//!
//! The pack format predates any real encoding awareness: a "wide" string is
//! just a byte string with every byte zero-extended to a code point. The
//! bridge makes that coupling explicit: callers opt in instead of relying on
//! an implicit coercion.

/// Reinterpret every byte as one code point. Length-preserving.
#[inline]
pub fn widen(raw: &[u8]) -> Vec<u32> {
    raw.iter().map(|&b| u32::from(b)).collect()
}

/// Truncate every code point to its low 8 bits. Length-preserving.
///
/// Lossy for code points above 255; callers must only narrow values they know
/// fit, this is not a UTF-8 re-encoder.
#[inline]
pub fn narrow(wide: &[u32]) -> Vec<u8> {
    wide.iter().map(|&c| c as u8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widen_is_one_to_one() {
        assert_eq!(widen(b"abc"), vec![0x61, 0x62, 0x63]);
        assert_eq!(widen(&[0x00, 0xFF]), vec![0x00, 0xFF]);
        assert_eq!(widen(b""), Vec::<u32>::new());
    }

    #[test]
    fn narrow_truncates_to_low_byte() {
        assert_eq!(narrow(&[0x61, 0xE9]), vec![0x61, 0xE9]);
        assert_eq!(narrow(&[0x20AC]), vec![0xAC]);
    }

    #[test]
    fn round_trip_preserves_bytes() {
        let raw: Vec<u8> = (0..=255).collect();
        assert_eq!(narrow(&widen(&raw)), raw);
    }
}
