//! Condensed string back to a JSON tree.

use serde_json::{Map, Value};

use crate::error::CondenseError;
use crate::model::{KeyTable, NumberModel, StringModel, TypeCode, TypeModel};
use crate::range::RangeDecoder;

/// Decodes a string produced by [`compress_json`](crate::compress_json)
/// back into the JSON value it came from.
///
/// The only reported error is a character outside the condensed
/// alphabet. Any in-alphabet string decodes to *some* value; damaged
/// or truncated payloads yield an unspecified one rather than an
/// error, mirroring the coder's treatment of exhausted input as zero
/// digits.
pub fn decompress_json(input: &str) -> Result<Value, CondenseError> {
    let mut coder = RangeDecoder::new(input)?;

    let mut counts = [0u64; 12];
    for count in &mut counts {
        *count = coder.load_size();
    }
    let types = TypeModel::from_counts(counts);
    let mut strings = StringModel::new();
    let keys = KeyTable::load_header(&mut coder, &mut strings);

    let mut decompressor = Decompressor {
        coder,
        types,
        keys,
        numbers: NumberModel::new(),
        strings,
    };
    Ok(decompressor.load_value(None))
}

struct Decompressor {
    coder: RangeDecoder,
    types: TypeModel,
    keys: KeyTable,
    numbers: NumberModel,
    strings: StringModel,
}

impl Decompressor {
    fn load_value(&mut self, known: Option<TypeCode>) -> Value {
        let t = match known {
            Some(t) => t,
            None => self.types.load(&mut self.coder),
        };
        match t {
            TypeCode::Null => Value::Null,
            TypeCode::Bool => Value::Bool(self.coder.load_base(2) == 1),
            TypeCode::Number => self.numbers.load(&mut self.coder),
            TypeCode::Str => Value::String(self.strings.load(&mut self.coder)),
            TypeCode::Array | TypeCode::BoolArray | TypeCode::NumberArray | TypeCode::StrArray => {
                let len = self.coder.load_size();
                let element = t.element();
                let mut items = Vec::with_capacity(len.min(64 * 1024) as usize);
                for _ in 0..len {
                    items.push(self.load_value(element));
                }
                Value::Array(items)
            }
            TypeCode::Object
            | TypeCode::BoolObject
            | TypeCode::NumberObject
            | TypeCode::StrObject => {
                let len = self.coder.load_size();
                let element = t.element();
                let mut map = Map::new();
                for _ in 0..len {
                    let key = self.keys.load_ref(&mut self.coder).to_owned();
                    map.insert(key, self.load_value(element));
                }
                Value::Object(map)
            }
        }
    }
}
