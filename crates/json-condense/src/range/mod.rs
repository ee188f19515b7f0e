//! Arbitrary-precision base-92 range coder: the arithmetic substrate
//! under every model in the codec.

mod alphabet;
pub(crate) mod constants;
mod decoder;
mod encoder;

pub(crate) use decoder::RangeDecoder;
pub(crate) use encoder::RangeEncoder;

/// `a * b / c` with a widened intermediate product and floor division.
///
/// Both coder halves must split intervals with bit-identical arithmetic;
/// this is the single place that arithmetic lives.
pub(crate) fn mul_div(a: u64, b: u64, c: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) / u128::from(c)) as u64
}
