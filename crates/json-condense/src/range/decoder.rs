//! Decode half of the arbitrary-precision base-92 range coder.

use super::alphabet;
use super::constants::{RADIX, RENORM_FLOOR, SIZE_BASE_MAX};
use super::mul_div;
use crate::error::CondenseError;

/// Range decoder scanning a base-92 digit sequence.
///
/// Exhausted input is treated as an endless run of zero digits; this is
/// what lets the encoder trim insignificant trailing zeros. The decoder
/// never reports malformed content: any in-alphabet input resolves to
/// some symbol sequence.
pub(crate) struct RangeDecoder {
    digits: Vec<u8>,
    pos: usize,
    value: u64,
    range: u64,
}

impl RangeDecoder {
    pub(crate) fn new(input: &str) -> Result<Self, CondenseError> {
        let mut digits = Vec::with_capacity(input.len());
        for c in input.chars() {
            match alphabet::char_to_digit(c) {
                Some(digit) => digits.push(digit),
                None => return Err(CondenseError::InvalidCharacter(c)),
            }
        }
        Ok(Self {
            digits,
            pos: 0,
            value: 0,
            range: 1,
        })
    }

    fn renormalize(&mut self) {
        while self.range < RENORM_FLOOR {
            self.range *= RADIX;
            self.value *= RADIX;
            if self.pos < self.digits.len() {
                self.value += u64::from(self.digits[self.pos]);
                self.pos += 1;
            }
        }
    }

    /// Reads one symbol of a uniform interval of width `total`,
    /// mirroring [`RangeEncoder::store_base`] with `high = low + 1`.
    ///
    /// [`RangeEncoder::store_base`]: super::RangeEncoder::store_base
    pub(crate) fn load_base(&mut self, total: u64) -> u64 {
        self.renormalize();
        if total == 0 {
            return 0;
        }
        let mut k = mul_div(self.value, total, self.range);
        let mut low = mul_div(k, self.range, total);
        let mut high = mul_div(k + 1, self.range, total);
        // Floor division can place the value at or past the computed
        // upper edge; advance to the next interval when it does.
        if self.value >= high {
            k += 1;
            low = high;
            high = mul_div(k + 1, self.range, total);
        }
        self.value -= low;
        self.range = high - low;
        k
    }

    /// Reads one symbol of an adaptive histogram laid out as
    /// `[count_0, .., count_n-1, total]`.
    pub(crate) fn load_symbol(&mut self, hist: &[u64]) -> usize {
        self.renormalize();
        let Some((&total, counts)) = hist.split_last() else {
            return 0;
        };
        if total == 0 || counts.is_empty() {
            return 0;
        }
        let mut cum = 0u64;
        let mut low = 0u64;
        for (k, &count) in counts.iter().enumerate() {
            cum += count;
            let high = mul_div(self.range, cum, total);
            if self.value < high {
                self.value -= low;
                self.range = high - low;
                return k;
            }
            low = high;
        }
        counts.len() - 1
    }

    /// Reads one symbol against a static cumulative table
    /// `[0, c_0, c_0+c_1, .., total]`.
    pub(crate) fn load_category(&mut self, cum: &[u64]) -> usize {
        self.renormalize();
        let Some((&total, heads)) = cum.split_last() else {
            return 0;
        };
        if total == 0 || heads.is_empty() {
            return 0;
        }
        for k in 0..heads.len() {
            let low = mul_div(self.range, cum[k], total);
            let high = mul_div(self.range, cum[k + 1], total);
            if self.value < high {
                self.value -= low;
                self.range = high - low;
                return k;
            }
        }
        heads.len() - 1
    }

    /// Mirror of [`RangeEncoder::store_size`].
    ///
    /// [`RangeEncoder::store_size`]: super::RangeEncoder::store_size
    pub(crate) fn load_size(&mut self) -> u64 {
        let mut n: u64 = 0;
        let mut base: u64 = 10;
        loop {
            let k = self.load_base(base);
            if k < base - 1 {
                return n.saturating_add(k);
            }
            n = n.saturating_add(base - 1);
            base = (base * 10).min(SIZE_BASE_MAX);
        }
    }
}
