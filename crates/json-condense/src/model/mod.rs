//! Probability models driving the range coder: static type and key
//! tables built by a pre-pass, adaptive number and string models kept
//! in lockstep by both sides.

mod key_table;
mod number;
mod string;
mod type_code;

pub use type_code::TypeCode;

pub(crate) use key_table::KeyTable;
pub(crate) use number::NumberModel;
pub(crate) use string::StringModel;
pub(crate) use type_code::TypeModel;

/// Halves a static count table until its total fits under `limit`.
/// Non-zero counts never drop to zero, so every tallied symbol keeps a
/// codable interval.
pub(crate) fn normalize_counts(counts: &mut [u64], limit: u64) {
    loop {
        let total: u64 = counts.iter().fold(0, |acc, &c| acc.saturating_add(c));
        if total <= limit || counts.iter().all(|&c| c <= 1) {
            return;
        }
        for count in counts.iter_mut() {
            *count = (*count + 1) / 2;
        }
    }
}
