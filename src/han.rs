//! Traditional → simplified Chinese transliteration.
//!
//! The converter works directly on UTF-8 bytes. Traditional ideographs all
//! live in three-byte sequences with leads 0xE4..=0xE9, so the lookup is a
//! two-level index: lead and second byte select a run of candidates, and the
//! run is scanned by third byte. Candidates within a run are sorted
//! ascending, which lets the scan stop as soon as the stored third byte
//! passes the input's.

mod data;

use std::sync::LazyLock;
use tracing::debug;

/// First lead byte covered by the index.
const LEAD_BASE: u8 = 0xE4;
/// Number of lead bytes covered (0xE4..=0xE9).
const LEAD_SPAN: usize = 6;
/// Second bytes are continuation bytes, 0x80..=0xBF.
const SECOND_SPAN: usize = 64;

const NO_ENTRY: u16 = u16::MAX;

#[derive(Clone, Copy)]
struct Candidate {
    second: u8,
    third: u8,
    simplified: u16,
}

struct HanTable {
    /// `second_index[lead - 0xE4][second - 0x80]` → offset into `candidates`.
    second_index: [[u16; SECOND_SPAN]; LEAD_SPAN],
    candidates: Vec<Candidate>,
    /// Replacement sequences, always three bytes of UTF-8.
    simplified: Vec<[u8; 3]>,
}

static TABLE: LazyLock<HanTable> = LazyLock::new(HanTable::build);

impl HanTable {
    fn build() -> Self {
        let mut entries: Vec<([u8; 3], [u8; 3])> = Vec::with_capacity(data::PAIRS.len());
        for &(traditional, simplified) in data::PAIRS {
            let mut from = [0u8; 3];
            let mut to = [0u8; 3];
            traditional.encode_utf8(&mut from);
            simplified.encode_utf8(&mut to);
            debug_assert!(
                traditional.len_utf8() == 3 && (LEAD_BASE..LEAD_BASE + LEAD_SPAN as u8).contains(&from[0]),
                "traditional character U+{:04X} outside the indexed lead range",
                traditional as u32
            );
            debug_assert_eq!(simplified.len_utf8(), 3);
            entries.push((from, to));
        }
        // Sorting by traditional bytes groups candidates per (lead, second)
        // and orders each run ascending by third byte, which the scan relies on.
        entries.sort_unstable_by_key(|&(from, _)| from);
        entries.dedup_by_key(|&mut (from, _)| from);

        let mut second_index = [[NO_ENTRY; SECOND_SPAN]; LEAD_SPAN];
        let mut candidates = Vec::with_capacity(entries.len());
        let mut simplified = Vec::with_capacity(entries.len());
        let mut previous_lead = None;
        for (from, to) in entries {
            // Runs terminate on a second-byte mismatch, so two leads whose
            // runs share a second byte must not sit back to back. A record
            // with second = 0 can never match a continuation byte and acts
            // as the terminator between lead groups.
            if previous_lead.is_some_and(|p| p != from[0]) {
                candidates.push(Candidate { second: 0, third: 0, simplified: 0 });
            }
            previous_lead = Some(from[0]);
            let lead = (from[0] - LEAD_BASE) as usize;
            let second = (from[1] - 0x80) as usize;
            if second_index[lead][second] == NO_ENTRY {
                second_index[lead][second] = candidates.len() as u16;
            }
            let index = simplified.len() as u16;
            simplified.push(to);
            candidates.push(Candidate { second: from[1], third: from[2], simplified: index });
        }
        debug!(candidates = candidates.len(), "han transliteration table built");
        HanTable { second_index, candidates, simplified }
    }

    /// Find the replacement for the three-byte sequence `lead second third`.
    fn lookup(&self, lead: u8, second: u8, third: u8) -> Option<&[u8; 3]> {
        if !(0x80..0xC0).contains(&second) {
            return None;
        }
        let start = self.second_index[(lead - LEAD_BASE) as usize][(second - 0x80) as usize];
        if start == NO_ENTRY {
            return None;
        }
        for candidate in &self.candidates[start as usize..] {
            if candidate.second != second || candidate.third > third {
                break;
            }
            if candidate.third == third {
                return Some(&self.simplified[candidate.simplified as usize]);
            }
        }
        None
    }
}

/// True if `b` can start an indexed three-byte sequence.
#[inline]
pub(crate) fn is_candidate_lead(b: u8) -> bool {
    b & 0xE0 == 0xE0 && (LEAD_BASE..LEAD_BASE + LEAD_SPAN as u8).contains(&b)
}

/// Convert traditional Chinese text (UTF-8) to simplified.
///
/// Single pass. Anything that is not an indexed three-byte sequence (ASCII,
/// other scripts, a candidate lead with fewer than two bytes after it) is
/// copied through byte for byte. Continuation bytes of skipped sequences fail
/// the lead test themselves, so copying bytewise is safe.
pub fn convert(input: &[u8]) -> Vec<u8> {
    let table = &*TABLE;
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    let len = input.len();
    while i < len {
        let c = input[i];
        if is_candidate_lead(c) && i + 2 < len {
            match table.lookup(c, input[i + 1], input[i + 2]) {
                Some(replacement) => out.extend_from_slice(replacement),
                None => out.extend_from_slice(&input[i..i + 3]),
            }
            i += 3;
        } else {
            out.push(c);
            i += 1;
        }
    }
    out
}

/// True if converting `input` would change anything. Same scan as
/// [`convert`] without building the output.
pub fn would_convert(input: &[u8]) -> bool {
    let table = &*TABLE;
    let mut i = 0;
    let len = input.len();
    while i < len {
        let c = input[i];
        if is_candidate_lead(c) && i + 2 < len {
            if table.lookup(c, input[i + 1], input[i + 2]).is_some() {
                return true;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_known_characters() {
        assert_eq!(convert("愛".as_bytes()), "爱".as_bytes());
        assert_eq!(convert("馬".as_bytes()), "马".as_bytes());
        assert_eq!(convert("中華民國".as_bytes()), "中华民国".as_bytes());
    }

    #[test]
    fn simplified_input_is_unchanged() {
        let text = "简体中文".as_bytes();
        assert_eq!(convert(text), text);
    }

    #[test]
    fn ascii_and_mixed_text() {
        assert_eq!(convert(b"plain ascii"), b"plain ascii");
        assert_eq!(convert("wiki 繁體 page".as_bytes()), "wiki 繁体 page".as_bytes());
    }

    #[test]
    fn out_of_range_lead_is_copied() {
        // € is E2 82 AC: three bytes, but the lead is below 0xE4.
        let text = "€100".as_bytes();
        assert_eq!(convert(text), text);
        // 가 (U+AC00) is EA B0 80: lead above 0xE9.
        let hangul = "가".as_bytes();
        assert_eq!(convert(hangul), hangul);
    }

    #[test]
    fn truncated_sequence_is_copied_bytewise() {
        let mut text = b"x".to_vec();
        text.extend_from_slice(&"東".as_bytes()[..2]);
        assert_eq!(convert(&text), text);
    }

    #[test]
    fn candidate_runs_are_sorted_and_terminated() {
        let table = &*TABLE;
        for (lead_slot, row) in table.second_index.iter().enumerate() {
            for (second_slot, &start) in row.iter().enumerate() {
                if start == NO_ENTRY {
                    continue;
                }
                let second = 0x80 + second_slot as u8;
                let run: Vec<_> = table.candidates[start as usize..]
                    .iter()
                    .take_while(|c| c.second == second)
                    .collect();
                assert!(!run.is_empty(), "index points at a foreign run");
                for window in run.windows(2) {
                    assert!(
                        window[0].third < window[1].third,
                        "run for lead {:#04X} second {second:#04X} not strictly ascending",
                        0xE4 + lead_slot
                    );
                }
            }
        }
    }

    #[test]
    fn every_pair_is_reachable() {
        for &(traditional, simplified) in super::data::PAIRS {
            let converted = convert(traditional.to_string().as_bytes());
            assert_eq!(
                converted,
                simplified.to_string().as_bytes(),
                "pair {traditional} → {simplified} not honoured"
            );
        }
    }

    #[test]
    fn would_convert_agrees_with_convert() {
        for text in ["愛", "中文 ascii", "plain", "简体"] {
            let bytes = text.as_bytes();
            assert_eq!(would_convert(bytes), convert(bytes) != bytes);
        }
    }
}
