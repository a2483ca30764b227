//! Script construction
//!
//! Only the push operations needed to build coinbase scripts.

use serde::Serialize;

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;

/// Raw script bytes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Script(#[serde(with = "crate::util::hex_bytes")] Vec<u8>);

impl Script {
    /// Create an empty script
    pub fn new() -> Self {
        Script(Vec::new())
    }

    pub fn builder() -> ScriptBuilder {
        ScriptBuilder::default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Incremental script builder
#[derive(Debug, Default)]
pub struct ScriptBuilder {
    bytes: Vec<u8>,
}

impl ScriptBuilder {
    /// Push a small integer, using the dedicated opcodes where one exists
    pub fn push_int(mut self, n: i64) -> Self {
        match n {
            0 => self.bytes.push(OP_0),
            -1 => self.bytes.push(OP_1NEGATE),
            1..=16 => self.bytes.push(OP_1 + (n as u8 - 1)),
            _ => return self.push_num(n),
        }
        self
    }

    /// Push a number as a data element in script-number encoding
    pub fn push_num(self, n: i64) -> Self {
        let bytes = scriptnum_bytes(n);
        self.push_slice(&bytes)
    }

    /// Push a byte string with the shortest push opcode
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.bytes.push(len as u8);
        } else if len <= 0xff {
            self.bytes.push(OP_PUSHDATA1);
            self.bytes.push(len as u8);
        } else if len <= 0xffff {
            self.bytes.push(OP_PUSHDATA2);
            self.bytes.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.bytes.push(OP_PUSHDATA4);
            self.bytes.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.bytes.extend_from_slice(data);
        self
    }

    pub fn into_script(self) -> Script {
        Script(self.bytes)
    }
}

/// Minimal little-endian sign-magnitude encoding of a script number
pub fn scriptnum_bytes(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }

    let negative = n < 0;
    let mut magnitude = n.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while magnitude > 0 {
        out.push((magnitude & 0xff) as u8);
        magnitude >>= 8;
    }

    // The top bit carries the sign; add a byte if the magnitude already uses it.
    if let Some(&top) = out.last() {
        if top & 0x80 != 0 {
            out.push(if negative { 0x80 } else { 0x00 });
        } else if negative {
            let last = out.len() - 1;
            out[last] |= 0x80;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_ints_use_opcodes() {
        let script = Script::builder().push_int(0).push_int(1).push_int(16).push_int(-1).into_script();
        assert_eq!(script.as_bytes(), &[OP_0, 0x51, 0x60, OP_1NEGATE]);
    }

    #[test]
    fn test_push_num_is_data_push() {
        let script = Script::builder().push_num(42).into_script();
        assert_eq!(script.as_bytes(), &[0x01, 0x2a]);
    }

    #[test]
    fn test_scriptnum_sign_handling() {
        assert_eq!(scriptnum_bytes(0), Vec::<u8>::new());
        assert_eq!(scriptnum_bytes(127), vec![0x7f]);
        assert_eq!(scriptnum_bytes(128), vec![0x80, 0x00]);
        assert_eq!(scriptnum_bytes(-1), vec![0x81]);
        assert_eq!(scriptnum_bytes(-128), vec![0x80, 0x80]);
        assert_eq!(scriptnum_bytes(256), vec![0x00, 0x01]);
    }

    #[test]
    fn test_pushdata1_for_long_slices() {
        let data = [0xaa; 80];
        let script = Script::builder().push_slice(&data).into_script();
        assert_eq!(&script.as_bytes()[..2], &[OP_PUSHDATA1, 80]);
        assert_eq!(script.len(), 82);
    }
}
