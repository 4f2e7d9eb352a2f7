//! UTF-8 codec with the pack format's malformed-input recovery.
//!
//! This is deliberately not a validating decoder. The legacy packs tolerate
//! damaged article text, so the rules are: a truncated sequence at the end of
//! input is dropped silently, and an invalid lead byte becomes a single `?`.
//! Both behaviours are part of the format contract and pinned by tests.

/// Placeholder emitted for an invalid lead byte.
pub const PLACEHOLDER: u8 = b'?';

/// Filler byte used by [`decode_to_bytes`] for sequences it cannot narrow.
pub const NARROW_PAD: u8 = b'#';

/// Encode a code-point sequence as UTF-8. Total: any 21-bit value packs.
pub fn encode(wide: &[u32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(wide.len());
    for &c in wide {
        if c < 0x80 {
            out.push(c as u8);
        } else if c < 0x800 {
            out.push(0xC0 | (c >> 6) as u8);
            out.push(0x80 | (c & 0x3F) as u8);
        } else if c < 0x1_0000 {
            out.push(0xE0 | (c >> 12) as u8);
            out.push(0x80 | (c >> 6 & 0x3F) as u8);
            out.push(0x80 | (c & 0x3F) as u8);
        } else {
            out.push(0xF0 | (c >> 18) as u8);
            out.push(0x80 | (c >> 12 & 0x3F) as u8);
            out.push(0x80 | (c >> 6 & 0x3F) as u8);
            out.push(0x80 | (c & 0x3F) as u8);
        }
    }
    out
}

/// Encode a raw byte string as UTF-8 without widening it first.
///
/// Bytes never exceed code point 255, so the output only ever contains one-
/// and two-byte sequences.
pub fn encode_raw(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    for &b in raw {
        if b < 0x80 {
            out.push(b);
        } else {
            out.push(0xC0 | (b >> 6));
            out.push(0x80 | (b & 0x3F));
        }
    }
    out
}

/// Decode UTF-8 bytes to code points.
///
/// Truncated trailing sequences are dropped; an invalid lead byte decodes to
/// `?` and consumes exactly one byte. Continuation bytes are not validated;
/// the lead byte alone decides how many bytes are consumed.
pub fn decode(bytes: &[u8]) -> Vec<u32> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    let len = bytes.len();
    while i < len {
        let c1 = u32::from(bytes[i]);
        i += 1;
        if c1 < 0x80 {
            out.push(c1);
        } else if c1 & 0xE0 == 0xC0 {
            if i < len {
                let c2 = u32::from(bytes[i]);
                i += 1;
                out.push((c1 & 0x1F) << 6 | (c2 & 0x3F));
            } else {
                break;
            }
        } else if c1 & 0xF0 == 0xE0 {
            if i + 1 < len {
                let c2 = u32::from(bytes[i]);
                let c3 = u32::from(bytes[i + 1]);
                i += 2;
                out.push((c1 & 0x0F) << 12 | (c2 & 0x3F) << 6 | (c3 & 0x3F));
            } else {
                break;
            }
        } else if c1 & 0xF8 == 0xF0 {
            if i + 2 < len {
                let c2 = u32::from(bytes[i]);
                let c3 = u32::from(bytes[i + 1]);
                let c4 = u32::from(bytes[i + 2]);
                i += 3;
                out.push((c1 & 0x07) << 18 | (c2 & 0x3F) << 12 | (c3 & 0x3F) << 6 | (c4 & 0x3F));
            } else {
                break;
            }
        } else {
            out.push(u32::from(PLACEHOLDER));
        }
    }
    out
}

/// Decode UTF-8 to a raw byte string for the legacy single-byte callers.
///
/// Two-byte sequences collapse into one byte by combining their payload bits
/// and truncating to 8 bits, exact only up to Latin-1, which is all those
/// callers ever hold. Three- and four-byte sequences are not decoded at all:
/// they are replaced by `##` and `###` respectively, without reading the
/// continuation bytes. This quirk is load-bearing for pack compatibility.
pub fn decode_to_bytes(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    let len = bytes.len();
    while i < len {
        let c1 = bytes[i];
        i += 1;
        if c1 < 0x80 {
            out.push(c1);
        } else if c1 & 0xE0 == 0xC0 {
            if i < len {
                let c2 = bytes[i];
                i += 1;
                out.push((u32::from(c1) << 6 | u32::from(c2 & 0x3F)) as u8);
            } else {
                break;
            }
        } else if c1 & 0xF0 == 0xE0 {
            if i + 1 < len {
                i += 2;
                out.extend_from_slice(&[NARROW_PAD; 2]);
            } else {
                break;
            }
        } else if c1 & 0xF8 == 0xF0 {
            if i + 2 < len {
                i += 3;
                out.extend_from_slice(&[NARROW_PAD; 3]);
            } else {
                break;
            }
        } else {
            out.push(PLACEHOLDER);
        }
    }
    out
}
