//! 12-way value classification and the static type histogram.

use serde_json::Value;

use crate::range::constants::STATIC_TOTAL_LIMIT;
use crate::range::{RangeDecoder, RangeEncoder};

use super::normalize_counts;

/// Classification of a JSON value, including shallow homogeneous
/// collection codes.
///
/// An array or object is homogeneous only when every element classifies
/// as exactly the same primitive (`Bool`, `Number` or `Str`); nested
/// collections, `null` members, empty and mixed collections classify as
/// plain [`Array`](TypeCode::Array) / [`Object`](TypeCode::Object).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCode {
    Null = 0,
    Bool = 1,
    Number = 2,
    Str = 3,
    Array = 4,
    BoolArray = 5,
    NumberArray = 6,
    StrArray = 7,
    Object = 8,
    BoolObject = 9,
    NumberObject = 10,
    StrObject = 11,
}

impl TypeCode {
    /// Classifies a value. Pure and side-effect free; the homogeneity
    /// check is a shallow scan over direct children.
    pub fn of(value: &Value) -> TypeCode {
        match value {
            Value::Null => TypeCode::Null,
            Value::Bool(_) => TypeCode::Bool,
            Value::Number(_) => TypeCode::Number,
            Value::String(_) => TypeCode::Str,
            Value::Array(items) => match uniform_element(items.iter()) {
                Some(element) => TypeCode::from_index(4 + element.index()),
                None => TypeCode::Array,
            },
            Value::Object(map) => match uniform_element(map.values()) {
                Some(element) => TypeCode::from_index(8 + element.index()),
                None => TypeCode::Object,
            },
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub(crate) fn from_index(index: usize) -> TypeCode {
        match index {
            1 => TypeCode::Bool,
            2 => TypeCode::Number,
            3 => TypeCode::Str,
            4 => TypeCode::Array,
            5 => TypeCode::BoolArray,
            6 => TypeCode::NumberArray,
            7 => TypeCode::StrArray,
            8 => TypeCode::Object,
            9 => TypeCode::BoolObject,
            10 => TypeCode::NumberObject,
            11 => TypeCode::StrObject,
            _ => TypeCode::Null,
        }
    }

    /// The element type a homogeneous collection fixes for its children.
    pub(crate) fn element(self) -> Option<TypeCode> {
        match self {
            TypeCode::BoolArray | TypeCode::BoolObject => Some(TypeCode::Bool),
            TypeCode::NumberArray | TypeCode::NumberObject => Some(TypeCode::Number),
            TypeCode::StrArray | TypeCode::StrObject => Some(TypeCode::Str),
            _ => None,
        }
    }
}

fn uniform_element<'a>(items: impl Iterator<Item = &'a Value>) -> Option<TypeCode> {
    let mut element = None;
    for item in items {
        let t = TypeCode::of(item);
        if !matches!(t, TypeCode::Bool | TypeCode::Number | TypeCode::Str) {
            return None;
        }
        match element {
            None => element = Some(t),
            Some(first) if first != t => return None,
            Some(_) => {}
        }
    }
    element
}

/// Static frequency table over the 12 type codes, filled by one pre-pass
/// over the whole tree and never updated during the value pass.
#[derive(Default)]
pub(crate) struct TypeModel {
    counts: [u64; 12],
    cum: [u64; 13],
}

impl TypeModel {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn tally(&mut self, t: TypeCode) {
        self.counts[t.index()] += 1;
    }

    /// Scales raw pre-pass counts into the coder's envelope and builds
    /// the cumulative table. Encode side only; the scaled counts are
    /// what the header transmits.
    pub(crate) fn finalize(&mut self) {
        normalize_counts(&mut self.counts, STATIC_TOTAL_LIMIT);
        self.rebuild();
    }

    /// Rebuilds the cumulative table from counts received in a header.
    pub(crate) fn from_counts(counts: [u64; 12]) -> Self {
        let mut model = Self {
            counts,
            cum: [0; 13],
        };
        model.rebuild();
        model
    }

    fn rebuild(&mut self) {
        let mut total = 0u64;
        for (i, &count) in self.counts.iter().enumerate() {
            self.cum[i] = total;
            total = total.saturating_add(count);
        }
        self.cum[12] = total;
    }

    pub(crate) fn counts(&self) -> &[u64; 12] {
        &self.counts
    }

    pub(crate) fn store(&self, coder: &mut RangeEncoder, t: TypeCode) {
        let i = t.index();
        coder.store_base(self.cum[i], self.cum[i + 1], self.cum[12]);
    }

    pub(crate) fn load(&self, coder: &mut RangeDecoder) -> TypeCode {
        TypeCode::from_index(coder.load_category(&self.cum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primitives_classify_directly() {
        assert_eq!(TypeCode::of(&json!(null)), TypeCode::Null);
        assert_eq!(TypeCode::of(&json!(true)), TypeCode::Bool);
        assert_eq!(TypeCode::of(&json!(3.5)), TypeCode::Number);
        assert_eq!(TypeCode::of(&json!("x")), TypeCode::Str);
    }

    #[test]
    fn homogeneous_collections_get_dedicated_codes() {
        assert_eq!(TypeCode::of(&json!([1, 2, 3])), TypeCode::NumberArray);
        assert_eq!(TypeCode::of(&json!([true])), TypeCode::BoolArray);
        assert_eq!(TypeCode::of(&json!(["a", "b"])), TypeCode::StrArray);
        assert_eq!(TypeCode::of(&json!({"a": 1, "b": 2})), TypeCode::NumberObject);
        assert_eq!(TypeCode::of(&json!({"a": "x"})), TypeCode::StrObject);
        assert_eq!(TypeCode::of(&json!({"a": false})), TypeCode::BoolObject);
    }

    #[test]
    fn mixed_empty_and_nested_collections_stay_plain() {
        assert_eq!(TypeCode::of(&json!([])), TypeCode::Array);
        assert_eq!(TypeCode::of(&json!([1, "x"])), TypeCode::Array);
        assert_eq!(TypeCode::of(&json!([null, null])), TypeCode::Array);
        assert_eq!(TypeCode::of(&json!([[1], [2]])), TypeCode::Array);
        assert_eq!(TypeCode::of(&json!({})), TypeCode::Object);
        assert_eq!(TypeCode::of(&json!({"a": null})), TypeCode::Object);
        assert_eq!(TypeCode::of(&json!({"a": {"b": 1}})), TypeCode::Object);
        assert_eq!(TypeCode::of(&json!({"a": 1, "b": "x"})), TypeCode::Object);
    }

    #[test]
    fn tag_coding_roundtrips_through_the_table() {
        let mut model = TypeModel::new();
        let tags = [
            TypeCode::Null,
            TypeCode::Number,
            TypeCode::Number,
            TypeCode::NumberArray,
            TypeCode::Object,
            TypeCode::Str,
        ];
        for &t in &tags {
            model.tally(t);
        }
        model.finalize();

        let mut enc = RangeEncoder::new();
        for &t in &tags {
            model.store(&mut enc, t);
        }
        let packed = enc.finish();

        let received = TypeModel::from_counts(*model.counts());
        let mut dec = RangeDecoder::new(&packed).expect("alphabet output");
        for &t in &tags {
            assert_eq!(received.load(&mut dec), t);
        }
    }
}
