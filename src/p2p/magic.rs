//! Network magic bytes
//!
//! Every P2P message starts with the 4 message-start bytes of its network.

use serde::{Serialize, Serializer};
use std::fmt;

/// Size of the message-start marker
pub const MESSAGE_START_SIZE: usize = 4;

/// Network magic bytes to identify the network a message was intended for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Magic([u8; MESSAGE_START_SIZE]);

impl Magic {
    /// Main network magic bytes ("DEST")
    pub const MAINNET: Self = Self([0x44, 0x45, 0x53, 0x54]);
    /// Test network magic bytes ("dest")
    pub const TESTNET: Self = Self([0x64, 0x65, 0x73, 0x74]);

    pub const fn from_bytes(bytes: [u8; MESSAGE_START_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns the magic bytes as a 4-byte array.
    pub fn to_bytes(&self) -> [u8; MESSAGE_START_SIZE] {
        self.0
    }

    /// Whether a raw message begins with this magic
    pub fn starts(&self, message: &[u8]) -> bool {
        message.len() >= MESSAGE_START_SIZE && message[..MESSAGE_START_SIZE] == self.0
    }
}

impl fmt::Display for Magic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl Serialize for Magic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic_display() {
        assert_eq!(Magic::MAINNET.to_string(), "44455354");
        assert_eq!(Magic::TESTNET.to_string(), "64657374");
    }

    #[test]
    fn test_magic_starts_message() {
        let message = [0x44, 0x45, 0x53, 0x54, 0x00, 0x01];
        assert!(Magic::MAINNET.starts(&message));
        assert!(!Magic::TESTNET.starts(&message));
        assert!(!Magic::MAINNET.starts(&message[..3]));
    }
}
