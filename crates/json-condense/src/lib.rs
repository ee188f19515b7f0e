//! Lossless JSON tree condenser.
//!
//! Turns any [`serde_json::Value`] into a short string over a
//! 92-character printable alphabet (ASCII `!` through `~`, minus the
//! double quote and backslash) and back. The output embeds safely in
//! places where raw JSON is awkward: query strings, cookies, or JSON
//! string literals themselves, since the two escape-prone characters
//! never appear.
//!
//! Compression is statistical rather than structural: a pre-pass
//! builds frequency tables over value types and object keys, a header
//! transmits them once, and an arbitrary-precision range coder then
//! spends fractional characters per symbol. Adaptive models over
//! number shapes and string characters sharpen as the document goes
//! on, so repetitive documents condense far below their JSON text.
//!
//! ```
//! use serde_json::json;
//!
//! let value = json!({"user": "ada", "visits": [1, 2, 3], "active": true});
//! let condensed = json_condense::compress_json(&value);
//! let restored = json_condense::decompress_json(&condensed)?;
//! assert_eq!(restored, value);
//! # Ok::<(), json_condense::CondenseError>(())
//! ```
//!
//! Numbers decode in a canonical form: any finite value that is
//! integral and at most 2^53 - 1 in magnitude comes back as a JSON
//! integer, so `3.0` decodes as `3`. Every `f64` otherwise survives
//! bit-for-bit through its shortest decimal form.

mod compress;
mod decompress;
mod error;
mod model;
mod range;

pub use compress::compress_json;
pub use decompress::decompress_json;
pub use error::CondenseError;
pub use model::TypeCode;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn smoke_roundtrip() {
        let value = json!({
            "id": 1234,
            "title": "smoke",
            "ratio": 0.375,
            "tags": ["a", "b", "a"],
            "flags": {"x": true, "y": false},
            "empty": [],
            "none": null
        });
        let condensed = compress_json(&value);
        assert_eq!(decompress_json(&condensed).expect("roundtrip"), value);
    }

    #[test]
    fn scalar_roots_roundtrip() {
        for value in [
            json!(null),
            json!(true),
            json!(false),
            json!(0),
            json!(-5),
            json!("solo"),
            json!(""),
        ] {
            let condensed = compress_json(&value);
            assert_eq!(decompress_json(&condensed).expect("roundtrip"), value);
        }
    }
}
