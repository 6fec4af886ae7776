use std::fmt;

use serde::{Serialize, Serializer};

/// A value decoded by one recipe step.
///
/// Serialized as `{"type": "<kind>", "value": ...}`; byte blobs become a
/// lowercase hex string and text is written lossily as UTF-8.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    Unsigned(u64),
    Signed(i64),
    Bool(bool),
    F32(f32),
    F64(f64),
    Bytes(#[serde(serialize_with = "serialize_hex")] Vec<u8>),
    Text(#[serde(serialize_with = "serialize_lossy")] Vec<u8>),
}

fn serialize_hex<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}

fn serialize_lossy<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}

impl Value {
    /// Short type label used by the text renderer.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unsigned(_) => "unsigned",
            Self::Signed(_) => "signed",
            Self::Bool(_) => "bool",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Bytes(_) => "bytes",
            Self::Text(_) => "text",
        }
    }

    /// Format for a single text line, truncating blobs past `max_blob_bytes`.
    pub fn display_truncated(&self, max_blob_bytes: usize) -> String {
        match self {
            Self::Bytes(bytes) if bytes.len() > max_blob_bytes => format!(
                "[{}] {}.. (+{} bytes)",
                bytes.len(),
                hex::encode(&bytes[..max_blob_bytes]),
                bytes.len() - max_blob_bytes
            ),
            Self::Text(bytes) if bytes.len() > max_blob_bytes => format!(
                "{:?}.. (+{} bytes)",
                String::from_utf8_lossy(&bytes[..max_blob_bytes]),
                bytes.len() - max_blob_bytes
            ),
            other => other.to_string(),
        }
    }
}

// Floats use `{:?}` so very large and very small magnitudes switch to
// exponent form instead of printing hundreds of digits.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Signed(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v:?}"),
            Self::F64(v) => write!(f, "{v:?}"),
            Self::Bytes(bytes) => write!(f, "[{}] {}", bytes.len(), hex::encode(bytes)),
            Self::Text(bytes) => write!(f, "{:?}", String::from_utf8_lossy(bytes)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape_is_tagged() {
        let json = serde_json::to_string(&Value::Signed(-3)).unwrap();
        assert_eq!(json, r#"{"type":"signed","value":-3}"#);
        let json = serde_json::to_string(&Value::Bytes(vec![0xDE, 0xAD])).unwrap();
        assert_eq!(json, r#"{"type":"bytes","value":"dead"}"#);
        let json = serde_json::to_string(&Value::Text(b"hi".to_vec())).unwrap();
        assert_eq!(json, r#"{"type":"text","value":"hi"}"#);
    }

    #[test]
    fn display_forms() {
        assert_eq!(Value::Unsigned(7).to_string(), "7");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::F64(1.0).to_string(), "1.0");
        assert_eq!(Value::F64(-1e300).to_string(), "-1e300");
        assert_eq!(Value::Bytes(vec![1, 2]).to_string(), "[2] 0102");
        assert_eq!(Value::Text(b"a\nb".to_vec()).to_string(), r#""a\nb""#);
    }

    #[test]
    fn long_blobs_are_truncated() {
        let value = Value::Bytes(vec![0xAB; 10]);
        assert_eq!(value.display_truncated(4), "[10] abababab.. (+6 bytes)");
        assert_eq!(value.display_truncated(10), value.to_string());
    }
}
