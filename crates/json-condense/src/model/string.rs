//! Order-1 adaptive model over string content.

use crate::range::constants::{ADAPTIVE_TOTAL_LIMIT, UNICODE_TOTAL};
use crate::range::{RangeDecoder, RangeEncoder};

/// Number of symbol buckets: 95 for the printable ASCII range plus one
/// escape bucket for everything else.
const BUCKETS: usize = 96;

/// Extra context used before any character has been coded.
const START_CONTEXT: usize = BUCKETS;

/// Adaptive character model conditioned on the previous character's
/// bucket. A string is a UTF-16 length prefix followed by one bucket
/// symbol per character: printable ASCII lands in its own bucket, and
/// everything else is one escape symbol carrying the full Unicode
/// scalar value in a flat interval. A supplementary-plane character is
/// still a single symbol; it just accounts for two of the declared
/// units, so decode consumes an extra unit when the escaped scalar is
/// beyond the basic plane.
///
/// Context carries across consecutive strings on purpose: the last
/// character of one string primes the model for the next, and the
/// header's key texts warm the model the value pass then reuses. Both
/// sides apply identical bumps, so the histograms stay in lockstep
/// without ever being transmitted.
pub(crate) struct StringModel {
    contexts: Vec<[u64; BUCKETS + 1]>,
    current: usize,
}

impl StringModel {
    pub(crate) fn new() -> Self {
        // Every count starts at one so any symbol is codable from the
        // first character; the last slot holds the running total.
        let mut fresh = [1u64; BUCKETS + 1];
        fresh[BUCKETS] = BUCKETS as u64;
        Self {
            contexts: vec![fresh; BUCKETS + 1],
            current: START_CONTEXT,
        }
    }

    pub(crate) fn store(&mut self, coder: &mut RangeEncoder, s: &str) {
        coder.store_size(s.encode_utf16().count() as u64);
        for c in s.chars() {
            let bucket = bucket_of(c);
            coder.store_symbol(&self.contexts[self.current], bucket);
            if bucket == BUCKETS - 1 {
                let code = u64::from(c);
                coder.store_base(code, code + 1, UNICODE_TOTAL);
            }
            self.bump(bucket);
        }
    }

    pub(crate) fn load(&mut self, coder: &mut RangeDecoder) -> String {
        let mut remaining = coder.load_size();
        let mut out = String::with_capacity(remaining.min(64 * 1024) as usize);
        while remaining > 0 {
            remaining -= 1;
            let bucket = coder.load_symbol(&self.contexts[self.current]);
            if bucket == BUCKETS - 1 {
                let code = coder.load_base(UNICODE_TOTAL) as u32;
                if code >= 0x10000 {
                    remaining = remaining.saturating_sub(1);
                }
                // Surrogate-range codes can only come from damaged
                // input; they become replacement chars.
                out.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
            } else {
                out.push((bucket as u8 + 32) as char);
            }
            self.bump(bucket);
        }
        out
    }

    fn bump(&mut self, bucket: usize) {
        let ctx = &mut self.contexts[self.current];
        ctx[bucket] += 1;
        ctx[BUCKETS] += 1;
        if ctx[BUCKETS] >= ADAPTIVE_TOTAL_LIMIT {
            let mut total = 0u64;
            for count in &mut ctx[..BUCKETS] {
                *count = (*count + 1) / 2;
                total += *count;
            }
            ctx[BUCKETS] = total;
        }
        self.current = bucket;
    }
}

fn bucket_of(c: char) -> usize {
    let code = u32::from(c);
    if (32..=126).contains(&code) {
        code as usize - 32
    } else {
        BUCKETS - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(texts: &[&str]) {
        let mut enc = RangeEncoder::new();
        let mut model = StringModel::new();
        for s in texts {
            model.store(&mut enc, s);
        }
        let packed = enc.finish();

        let mut dec = RangeDecoder::new(&packed).expect("alphabet output");
        let mut model = StringModel::new();
        for s in texts {
            assert_eq!(model.load(&mut dec), *s);
        }
    }

    #[test]
    fn ascii_text_roundtrips() {
        roundtrip(&["hello world", "", "a", "the quick brown fox", "!\"\\~"]);
    }

    #[test]
    fn non_ascii_and_astral_text_roundtrips() {
        roundtrip(&["naïve café", "日本語のテキスト", "🦀 crab 🦀", "\u{0}\t\n"]);
    }

    #[test]
    fn supplementary_plane_characters_cost_one_symbol() {
        let mut enc = RangeEncoder::new();
        let mut model = StringModel::new();
        model.store(&mut enc, "𝄞🦀");
        // Fresh contexts total BUCKETS each; every coded symbol adds
        // exactly one on top, and each astral char is one symbol.
        let baseline = (BUCKETS as u64) * (BUCKETS as u64 + 1);
        let coded: u64 = model.contexts.iter().map(|ctx| ctx[BUCKETS]).sum::<u64>() - baseline;
        assert_eq!(coded, 2);
    }

    #[test]
    fn declared_length_counts_utf16_units() {
        // Astral chars account for two declared units but one symbol;
        // following strings only decode cleanly if the unit counter
        // advances by two for each of them.
        roundtrip(&["𝄞", "after", "🦀🦀🦀", "", "mixed 𝕏 middle"]);
    }

    #[test]
    fn context_flows_across_string_boundaries() {
        // Many repetitions of the same text should adapt the model; the
        // stream only roundtrips if decode applies the same bumps in
        // the same contexts across every boundary.
        let texts: Vec<&str> = std::iter::repeat("status: ok").take(200).collect();
        roundtrip(&texts);
    }
}
