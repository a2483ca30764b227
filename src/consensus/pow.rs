//! Proof-of-work and proof-of-stake targets
//!
//! A target is a 256-bit threshold; block headers carry it in the 32-bit
//! compact ("bits") form: one size byte followed by a 3-byte mantissa.

use primitive_types::U256;
use serde::Serialize;

/// Sign bit of the compact mantissa
const COMPACT_SIGN_BIT: u32 = 0x0080_0000;

/// 256-bit difficulty target
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Target(U256);

impl Target {
    pub const fn new(value: U256) -> Self {
        Target(value)
    }

    /// `!0 >> shift`, the usual way ceilings are written
    pub fn max_shifted(shift: u32) -> Self {
        Target(U256::MAX >> shift)
    }

    pub fn value(&self) -> U256 {
        self.0
    }

    /// Encode as compact bits
    pub fn to_compact(&self) -> u32 {
        let mut size = (self.0.bits() + 7) / 8;
        let mut compact = if size <= 3 {
            (self.0.low_u64() << (8 * (3 - size))) as u32
        } else {
            (self.0 >> (8 * (size - 3))).low_u32()
        };

        // Keep the mantissa positive by moving a byte into the exponent.
        if compact & COMPACT_SIGN_BIT != 0 {
            compact >>= 8;
            size += 1;
        }

        compact | ((size as u32) << 24)
    }

    /// Decode compact bits. The sign bit is ignored; mantissas shifted past
    /// 256 bits decode to zero.
    pub fn from_compact(bits: u32) -> Self {
        let size = (bits >> 24) as usize;
        let word = bits & 0x007f_ffff;
        let value = if size <= 3 {
            U256::from(word >> (8 * (3 - size)))
        } else if size > 34 {
            U256::zero()
        } else {
            U256::from(word) << (8 * (size - 3))
        };
        Target(value)
    }

    /// Whether a hash, read as a little-endian 256-bit number, meets this target
    pub fn is_met_by(&self, hash: &crate::crypto::Hash) -> bool {
        U256::from_little_endian(hash.as_bytes()) <= self.0
    }
}
