//! Address encoding - Base58Check with per-network prefixes

use thiserror::Error;

use crate::chainparams::{Base58Type, ChainParams};
use crate::crypto::double_hash;

/// Checksum length appended before Base58 encoding
const CHECKSUM_LEN: usize = 4;

/// Address decoding errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid base58 encoding")]
    InvalidBase58,
    #[error("Address too short")]
    TooShort,
    #[error("Invalid checksum")]
    InvalidChecksum,
    #[error("Invalid address prefix: expected {expected}, found {found}")]
    WrongPrefix { expected: String, found: String },
}

/// Encode `payload` as a `kind` string for the network of `params`.
///
/// Layout: prefix || payload || first 4 bytes of SHA-256d(prefix || payload)
pub fn encode_address(params: &ChainParams, kind: Base58Type, payload: &[u8]) -> String {
    let prefix = params.base58_prefix(kind);

    let mut data = Vec::with_capacity(prefix.len() + payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(prefix);
    data.extend_from_slice(payload);
    let checksum = double_hash(&data);
    data.extend_from_slice(&checksum.0[..CHECKSUM_LEN]);

    bs58::encode(data).into_string()
}

/// Decode a `kind` string for the network of `params` back to its payload.
pub fn decode_address(
    params: &ChainParams,
    kind: Base58Type,
    address: &str,
) -> Result<Vec<u8>, AddressError> {
    let decoded = bs58::decode(address)
        .into_vec()
        .map_err(|_| AddressError::InvalidBase58)?;

    let prefix = params.base58_prefix(kind);
    if decoded.len() < prefix.len() + CHECKSUM_LEN {
        return Err(AddressError::TooShort);
    }

    let (data, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    if checksum != &double_hash(data).0[..CHECKSUM_LEN] {
        return Err(AddressError::InvalidChecksum);
    }

    let (found, payload) = data.split_at(prefix.len());
    if found != prefix {
        return Err(AddressError::WrongPrefix {
            expected: hex::encode(prefix),
            found: hex::encode(found),
        });
    }

    Ok(payload.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chainparams::{Network, ParamsRegistry};
    use crate::crypto::ScryptHasher;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn registry() -> ParamsRegistry {
        let hasher = ScryptHasher::new().unwrap();
        ParamsRegistry::build(&hasher, &mut StdRng::seed_from_u64(3), 1_700_000_000).unwrap()
    }

    #[test]
    fn test_known_encodings() {
        let registry = registry();
        let main = registry.get(Network::Main).unwrap();
        let test = registry.get(Network::Test).unwrap();

        assert_eq!(
            encode_address(test, Base58Type::PubkeyAddress, &[0u8; 20]),
            "mfWxJ45yp2SFn7UciZyNpvDKrzbhyfKrY8"
        );
        assert_eq!(
            encode_address(main, Base58Type::PubkeyAddress, &[0u8; 20]),
            "57HvwpJjMNtucbANpoqGWZgcFakqXi4bCUdec"
        );
    }

    #[test]
    fn test_decode_returns_payload() {
        let registry = registry();
        let test = registry.get(Network::Test).unwrap();
        let payload: Vec<u8> = (0..20).collect();

        let address = encode_address(test, Base58Type::PubkeyAddress, &payload);
        assert_eq!(address, "mfWyW5fc9NUj75YAnFgoRLrjxgLDn2MMth");
        assert_eq!(decode_address(test, Base58Type::PubkeyAddress, &address).unwrap(), payload);
    }

    #[test]
    fn test_cross_network_address_rejected() {
        let registry = registry();
        let main = registry.get(Network::Main).unwrap();
        let test = registry.get(Network::Test).unwrap();

        let address = encode_address(test, Base58Type::ScriptAddress, &[7u8; 20]);
        let err = decode_address(main, Base58Type::ScriptAddress, &address).unwrap_err();
        assert!(matches!(err, AddressError::WrongPrefix { .. }));
    }

    #[test]
    fn test_corrupted_checksum_rejected() {
        let registry = registry();
        let test = registry.get(Network::Test).unwrap();
        let address = encode_address(test, Base58Type::SecretKey, &[1u8; 32]);

        let mut raw = bs58::decode(&address).into_vec().unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0x01;
        let corrupted = bs58::encode(raw).into_string();

        assert_eq!(
            decode_address(test, Base58Type::SecretKey, &corrupted),
            Err(AddressError::InvalidChecksum)
        );
    }

    #[test]
    fn test_invalid_base58_rejected() {
        let registry = registry();
        let main = registry.get(Network::Main).unwrap();
        assert_eq!(
            decode_address(main, Base58Type::PubkeyAddress, "0OIl"),
            Err(AddressError::InvalidBase58)
        );
        assert_eq!(
            decode_address(main, Base58Type::PubkeyAddress, "1"),
            Err(AddressError::TooShort)
        );
    }
}
