//! Numeric constants shared by both sides of the range coder.

/// Output radix: one coded digit per printable character.
pub(crate) const RADIX: u64 = 92;

/// Renormalization floor. While `range` is below this bound another
/// base-92 digit is brought in; the bound keeps `range * RADIX` under
/// 2^31 so post-split sub-intervals retain enough precision.
pub(crate) const RENORM_FLOOR: u64 = 23_091_221;

/// Width of the uniform interval carrying an escaped Unicode scalar
/// value, `0x110000`.
pub(crate) const UNICODE_TOTAL: u64 = 1_114_112;

/// Largest bucket used by the size code. The ladder grows 10, 100, ...
/// up to this base and then repeats it, so every frequency total handed
/// to the coder stays below [`RENORM_FLOOR`] and every coded sub-interval
/// is non-empty.
pub(crate) const SIZE_BASE_MAX: u64 = 10_000_000;

/// Ceiling for the totals of the static header histograms. Raw pre-pass
/// counts are halved until their sum fits under this bound before being
/// transmitted.
pub(crate) const STATIC_TOTAL_LIMIT: u64 = 1 << 22;

/// Ceiling for the totals of the adaptive histograms. When an update
/// pushes a histogram past this bound its counts are halved, identically
/// on the encode and decode sides.
pub(crate) const ADAPTIVE_TOTAL_LIMIT: u64 = 1 << 20;
