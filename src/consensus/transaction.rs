//! Transaction structure
//!
//! Proof-of-stake transactions carry their own timestamp after the version.

use serde::Serialize;

use super::encode::{write_compact_size, write_var_bytes};
use super::Script;
use crate::crypto::{double_hash, Hash};

/// Reference to a previous transaction output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutPoint {
    pub txid: Hash,
    pub index: u32,
}

impl OutPoint {
    /// The outpoint a coinbase input spends
    pub const fn null() -> Self {
        Self {
            txid: Hash::zero(),
            index: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.index == u32::MAX
    }
}

/// Transaction input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxIn {
    pub prev_out: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

impl TxIn {
    /// Coinbase input carrying an arbitrary script
    pub fn coinbase(script_sig: Script) -> Self {
        Self {
            prev_out: OutPoint::null(),
            script_sig,
            sequence: u32::MAX,
        }
    }
}

/// Transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxOut {
    pub value: i64,
    pub script_pubkey: Script,
}

impl TxOut {
    /// Output with zero value and an empty script
    pub fn empty() -> Self {
        Self {
            value: 0,
            script_pubkey: Script::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0 && self.script_pubkey.is_empty()
    }
}

/// A transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub version: i32,
    /// Transaction timestamp (seconds since Unix epoch)
    pub time: u32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    pub fn new(version: i32, time: u32, inputs: Vec<TxIn>, outputs: Vec<TxOut>, lock_time: u32) -> Self {
        Self {
            version,
            time,
            inputs,
            outputs,
            lock_time,
        }
    }

    /// Serialize the transaction for hashing
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.version.to_le_bytes());
        bytes.extend_from_slice(&self.time.to_le_bytes());

        write_compact_size(&mut bytes, self.inputs.len() as u64);
        for input in &self.inputs {
            bytes.extend_from_slice(&input.prev_out.txid.0);
            bytes.extend_from_slice(&input.prev_out.index.to_le_bytes());
            write_var_bytes(&mut bytes, input.script_sig.as_bytes());
            bytes.extend_from_slice(&input.sequence.to_le_bytes());
        }

        write_compact_size(&mut bytes, self.outputs.len() as u64);
        for output in &self.outputs {
            bytes.extend_from_slice(&output.value.to_le_bytes());
            write_var_bytes(&mut bytes, output.script_pubkey.as_bytes());
        }

        bytes.extend_from_slice(&self.lock_time.to_le_bytes());
        bytes
    }

    /// Transaction id (double SHA-256 of the serialization)
    pub fn txid(&self) -> Hash {
        double_hash(&self.to_bytes())
    }

    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prev_out.is_null()
    }
}
