//! Adaptive eight-category number model.
//!
//! Small integers get dedicated exact categories; everything else is
//! carried as a shortest round-trip decimal in one of three mantissa
//! tiers, so any `f64` survives a roundtrip bit-for-bit (modulo the
//! canonical integer form applied on decode).

use serde_json::{Number, Value};

use crate::range::constants::ADAPTIVE_TOTAL_LIMIT;
use crate::range::{RangeDecoder, RangeEncoder};

// Integer categories 0..=4: (lowest value, interval width).
const INT_RANGES: [(i64, u64); 5] = [
    (-10, 111),
    (-1_000_000, 990_000),
    (-10_000, 9_990),
    (10_001, 990_000),
    (101, 9_900),
];

/// Adaptive histogram over the eight number categories. Category
/// payloads are uniform intervals; only the category choice adapts.
pub(crate) struct NumberModel {
    hist: [u64; 9],
}

impl NumberModel {
    pub(crate) fn new() -> Self {
        let mut hist = [1u64; 9];
        hist[8] = 8;
        Self { hist }
    }

    pub(crate) fn store(&mut self, coder: &mut RangeEncoder, n: &Number) {
        match category_of(n) {
            Category::Int(cat, i) => {
                coder.store_symbol(&self.hist, cat);
                self.bump(cat);
                let (lowest, width) = INT_RANGES[cat];
                let v = (i - lowest) as u64;
                coder.store_base(v, v + 1, width);
            }
            Category::Float(cat, dec) => {
                coder.store_symbol(&self.hist, cat);
                self.bump(cat);
                let sign = if dec.negative { 0 } else { 1 };
                coder.store_base(sign, sign + 1, 2);
                match cat {
                    5 => {
                        let m = dec.mantissa(6);
                        coder.store_base(m, m + 1, 1_000_000);
                        let e = (dec.exponent + 2) as u64;
                        coder.store_base(e, e + 1, 10);
                    }
                    6 => {
                        let m = dec.mantissa(10);
                        let (hi, lo) = (m / 100_000, m % 100_000);
                        coder.store_base(hi, hi + 1, 100_000);
                        coder.store_base(lo, lo + 1, 100_000);
                        let e = (dec.exponent + 11) as u64;
                        coder.store_base(e, e + 1, 32);
                    }
                    _ => {
                        let m = dec.mantissa(17);
                        let a = m / 100_000_000_000;
                        let b = (m / 100_000) % 1_000_000;
                        let c = m % 100_000;
                        coder.store_base(a, a + 1, 1_000_000);
                        coder.store_base(b, b + 1, 1_000_000);
                        coder.store_base(c, c + 1, 100_000);
                        let e = (dec.exponent + 323) as u64;
                        coder.store_base(e, e + 1, 632);
                    }
                }
            }
        }
    }

    pub(crate) fn load(&mut self, coder: &mut RangeDecoder) -> Value {
        let cat = coder.load_symbol(&self.hist);
        self.bump(cat);
        if cat < 5 {
            let (lowest, width) = INT_RANGES[cat];
            let i = coder.load_base(width) as i64 + lowest;
            return Value::Number(Number::from(i));
        }
        let negative = coder.load_base(2) == 0;
        let (mantissa, exponent) = match cat {
            5 => {
                let m = coder.load_base(1_000_000);
                let e = coder.load_base(10) as i64 - 2;
                (m, e - 5)
            }
            6 => {
                let hi = coder.load_base(100_000);
                let lo = coder.load_base(100_000);
                let e = coder.load_base(32) as i64 - 11;
                (hi * 100_000 + lo, e - 9)
            }
            _ => {
                let a = coder.load_base(1_000_000);
                let b = coder.load_base(1_000_000);
                let c = coder.load_base(100_000);
                let e = coder.load_base(632) as i64 - 323;
                (a * 100_000_000_000 + b * 100_000 + c, e - 16)
            }
        };
        let text = format!(
            "{}{}e{}",
            if negative { "-" } else { "" },
            mantissa,
            exponent
        );
        number_value(text.parse().unwrap_or(0.0))
    }

    fn bump(&mut self, cat: usize) {
        self.hist[cat] += 1;
        self.hist[8] += 1;
        if self.hist[8] >= ADAPTIVE_TOTAL_LIMIT {
            let mut total = 0u64;
            for count in &mut self.hist[..8] {
                *count = (*count + 1) / 2;
                total += *count;
            }
            self.hist[8] = total;
        }
    }
}

enum Category {
    Int(usize, i64),
    Float(usize, Decimal),
}

fn category_of(n: &Number) -> Category {
    if let Some(i) = n.as_i64() {
        let cat = match i {
            -10..=100 => Some(0),
            -1_000_000..=-10_001 => Some(1),
            -10_000..=-11 => Some(2),
            10_001..=1_000_000 => Some(3),
            101..=10_000 => Some(4),
            _ => None,
        };
        if let Some(cat) = cat {
            return Category::Int(cat, i);
        }
    }
    let dec = Decimal::of(n.as_f64().unwrap_or(0.0));
    let cat = if dec.digits.len() <= 6 && (-2..=7).contains(&dec.exponent) {
        5
    } else if dec.digits.len() <= 10 && (-11..=20).contains(&dec.exponent) {
        6
    } else {
        7
    };
    Category::Float(cat, dec)
}

/// Shortest round-trip decimal form of a finite `f64`: the value is
/// `0.digits * 10 ^ (exponent + 1)`, sign carried separately.
struct Decimal {
    negative: bool,
    digits: String,
    exponent: i64,
}

impl Decimal {
    fn of(x: f64) -> Decimal {
        // `{:e}` prints the shortest digit string that parses back to
        // the same bits, at most 17 digits for any f64.
        let printed = format!("{:e}", x.abs());
        let (mantissa, exp) = printed.split_once('e').unwrap_or((printed.as_str(), "0"));
        let mut digits: String = mantissa.chars().filter(|c| *c != '.').collect();
        let mut exponent = exp.parse::<i64>().unwrap_or(0);
        // Subnormals can sit below the tier-3 exponent floor; shifting
        // a leading zero into the digit string keeps the value intact.
        while exponent < -323 {
            digits.insert(0, '0');
            exponent += 1;
        }
        Decimal {
            negative: x.is_sign_negative(),
            digits,
            exponent,
        }
    }

    /// Digit string right-padded with zeros to `width` digits, as an
    /// integer. Tier selection guarantees the string fits.
    fn mantissa(&self, width: usize) -> u64 {
        let m: u64 = self.digits.parse().unwrap_or(0);
        m * 10u64.pow((width - self.digits.len().min(width)) as u32)
    }
}

/// Canonical form applied to every decoded float: integral values that
/// fit the exact-integer window of an `f64` come back as JSON integers.
fn number_value(x: f64) -> Value {
    if x.is_finite() && x.fract() == 0.0 && x.abs() <= 9_007_199_254_740_991.0 {
        return Value::Number(Number::from(x as i64));
    }
    Number::from_f64(x).map(Value::Number).unwrap_or(Value::Null)
}
