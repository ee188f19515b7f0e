//! Shared object-key dictionary transmitted once in the header.

use indexmap::IndexMap;

use crate::range::constants::STATIC_TOTAL_LIMIT;
use crate::range::{RangeDecoder, RangeEncoder};

use super::normalize_counts;
use super::string::StringModel;

/// Every distinct object key in the tree, with a frequency used as a
/// static histogram during the value pass. Key text crosses the wire
/// exactly once; values reference keys by dictionary interval.
///
/// Insertion order is significant: the decoder rebuilds the table in
/// the order the header lists it, so interval indices line up.
#[derive(Default)]
pub(crate) struct KeyTable {
    keys: IndexMap<String, u64>,
    cum: Vec<u64>,
}

impl KeyTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn tally(&mut self, key: &str) {
        match self.keys.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.keys.insert(key.to_owned(), 1);
            }
        }
    }

    /// Scales the frequencies into the coder's envelope and builds the
    /// cumulative table. Must run before the header is written.
    pub(crate) fn finalize(&mut self) {
        let mut counts: Vec<u64> = self.keys.values().copied().collect();
        normalize_counts(&mut counts, STATIC_TOTAL_LIMIT);
        for (slot, count) in self.keys.values_mut().zip(&counts) {
            *slot = *count;
        }
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.cum.clear();
        let mut total = 0u64;
        self.cum.push(0);
        for &count in self.keys.values() {
            total = total.saturating_add(count);
            self.cum.push(total);
        }
    }

    /// Writes the dictionary: entry count, then each key's text and
    /// scaled frequency.
    pub(crate) fn store_header(&self, coder: &mut RangeEncoder, strings: &mut StringModel) {
        coder.store_size(self.keys.len() as u64);
        for (key, &count) in &self.keys {
            strings.store(coder, key);
            coder.store_size(count);
        }
    }

    /// Rebuilds the dictionary from a header in the same order the
    /// encoder listed it.
    pub(crate) fn load_header(coder: &mut RangeDecoder, strings: &mut StringModel) -> Self {
        let entries = coder.load_size();
        let mut table = Self::new();
        for _ in 0..entries {
            let key = strings.load(coder);
            let count = coder.load_size();
            table.keys.insert(key, count);
        }
        table.rebuild();
        table
    }

    pub(crate) fn store_ref(&self, coder: &mut RangeEncoder, key: &str) {
        // The pre-pass tallies every key in the tree, so lookup cannot
        // miss for input the encoder itself walked.
        let i = self.keys.get_index_of(key).unwrap_or(0);
        let total = self.cum[self.keys.len()];
        coder.store_base(self.cum[i], self.cum[i + 1], total);
    }

    pub(crate) fn load_ref(&self, coder: &mut RangeDecoder) -> &str {
        if self.keys.is_empty() {
            return "";
        }
        let i = coder.load_category(&self.cum);
        self.keys
            .get_index(i)
            .map(|(key, _)| key.as_str())
            .unwrap_or("")
    }
}
