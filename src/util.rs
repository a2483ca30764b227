//! Hex helpers for literals and serialization

/// Decode a hex literal, tolerating an optional `0x` prefix
pub fn parse_hex(hex: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(hex.strip_prefix("0x").unwrap_or(hex))
}

/// Serialize byte strings as lowercase hex
pub mod hex_bytes {
    use serde::Serializer;

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }
}
