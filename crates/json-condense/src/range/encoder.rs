//! Encode half of the arbitrary-precision base-92 range coder.

use super::alphabet;
use super::constants::{RADIX, RENORM_FLOOR, SIZE_BASE_MAX};
use super::mul_div;

/// Range encoder accumulating the coded value in a growable buffer of
/// base-92 digits, most significant first.
///
/// Narrowing an interval injects an offset into the buffer as a
/// big-number addition; carries may ripple through digits that were
/// renormalized long ago, which is why the buffer keeps every digit
/// rather than flushing finished ones.
pub(crate) struct RangeEncoder {
    digits: Vec<u8>,
    range: u64,
}

impl RangeEncoder {
    pub(crate) fn new() -> Self {
        Self {
            digits: Vec::new(),
            range: 1,
        }
    }

    /// Narrows the live range to the sub-interval `[low, high)` of
    /// `total` and adds the resulting offset to the digit buffer.
    ///
    /// Callers must keep `low < high <= total` and `total` below the
    /// renormalization floor; every sub-interval is then non-empty and
    /// the accumulated value never outgrows the buffer.
    pub(crate) fn store_base(&mut self, low: u64, high: u64, total: u64) {
        while self.range < RENORM_FLOOR {
            self.range *= RADIX;
            self.digits.push(0);
        }
        let mut offset = mul_div(self.range, low, total);
        let upper = mul_div(self.range, high, total);
        self.range = upper - offset;

        // Schoolbook addition, least significant digit first.
        let mut pos = self.digits.len();
        while offset > 0 {
            pos -= 1;
            self.digits[pos] += (offset % RADIX) as u8;
            if self.digits[pos] >= 92 {
                self.digits[pos] -= 92;
                self.digits[pos - 1] += 1;
            }
            offset /= RADIX;
        }
        // A carry may keep rippling toward the front of the buffer.
        while pos > 0 && self.digits[pos - 1] >= 92 {
            self.digits[pos - 1] -= 92;
            pos -= 1;
            if pos > 0 {
                self.digits[pos - 1] += 1;
            }
        }
    }

    /// Codes one symbol of an adaptive histogram laid out as
    /// `[count_0, .., count_n-1, total]`.
    pub(crate) fn store_symbol(&mut self, hist: &[u64], symbol: usize) {
        let total = hist[hist.len() - 1];
        let low: u64 = hist[..symbol].iter().sum();
        self.store_base(low, low + hist[symbol], total);
    }

    /// Codes a non-negative integer through the nested decimal bucket
    /// ladder: cheap for small values, unbounded above.
    pub(crate) fn store_size(&mut self, mut n: u64) {
        let mut base: u64 = 10;
        loop {
            if n < base - 1 {
                self.store_base(n, n + 1, base);
                return;
            }
            self.store_base(base - 1, base, base);
            n -= base - 1;
            base = (base * 10).min(SIZE_BASE_MAX);
        }
    }

    /// Drops insignificant trailing zero digits and maps the rest onto
    /// the printable alphabet.
    pub(crate) fn finish(mut self) -> String {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        self.digits
            .iter()
            .map(|&digit| alphabet::digit_to_char(digit))
            .collect()
    }
}
