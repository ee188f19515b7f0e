//! JSON tree to condensed string.

use serde_json::Value;

use crate::model::{KeyTable, NumberModel, StringModel, TypeCode, TypeModel};
use crate::range::RangeEncoder;

/// Encodes a JSON value as a compact string over the 92-character
/// printable alphabet. Never fails: every `serde_json::Value` has an
/// encoding.
///
/// The output embeds a header (type frequencies and the object-key
/// dictionary) followed by the range-coded value stream; feed it to
/// [`decompress_json`](crate::decompress_json) to get the value back.
pub fn compress_json(value: &Value) -> String {
    let mut compressor = Compressor::new();
    compressor.scan(value, true);
    compressor.finalize();
    compressor.store_header();
    compressor.store_value(value, None);
    compressor.finish()
}

struct Compressor {
    coder: RangeEncoder,
    types: TypeModel,
    keys: KeyTable,
    numbers: NumberModel,
    strings: StringModel,
}

impl Compressor {
    fn new() -> Self {
        Self {
            coder: RangeEncoder::new(),
            types: TypeModel::new(),
            keys: KeyTable::new(),
            numbers: NumberModel::new(),
            strings: StringModel::new(),
        }
    }

    /// Pre-pass over the whole tree, tallying exactly the type tags
    /// the value pass will transmit plus every object-key occurrence.
    fn scan(&mut self, value: &Value, tagged: bool) {
        let t = TypeCode::of(value);
        if tagged {
            self.types.tally(t);
        }
        // Children of a homogeneous collection carry no tag of their
        // own; their type is fixed by the parent's code.
        let fixed = t.element().is_some();
        match value {
            Value::Array(items) => {
                for item in items {
                    self.scan(item, !fixed);
                }
            }
            Value::Object(map) => {
                for (key, item) in map {
                    self.keys.tally(key);
                    self.scan(item, !fixed);
                }
            }
            _ => {}
        }
    }

    fn finalize(&mut self) {
        self.types.finalize();
        self.keys.finalize();
    }

    fn store_header(&mut self) {
        for &count in self.types.counts() {
            self.coder.store_size(count);
        }
        self.keys.store_header(&mut self.coder, &mut self.strings);
    }

    fn store_value(&mut self, value: &Value, known: Option<TypeCode>) {
        let t = match known {
            Some(t) => t,
            None => {
                let t = TypeCode::of(value);
                self.types.store(&mut self.coder, t);
                t
            }
        };
        match value {
            Value::Null => {}
            Value::Bool(b) => {
                let v = u64::from(*b);
                self.coder.store_base(v, v + 1, 2);
            }
            Value::Number(n) => self.numbers.store(&mut self.coder, n),
            Value::String(s) => self.strings.store(&mut self.coder, s),
            Value::Array(items) => {
                self.coder.store_size(items.len() as u64);
                let element = t.element();
                for item in items {
                    self.store_value(item, element);
                }
            }
            Value::Object(map) => {
                self.coder.store_size(map.len() as u64);
                let element = t.element();
                for (key, item) in map {
                    self.keys.store_ref(&mut self.coder, key);
                    self.store_value(item, element);
                }
            }
        }
    }

    fn finish(self) -> String {
        self.coder.finish()
    }
}
