// Purpose: Shared helpers for tests of the deterministic account contracts
use cosmwasm_std::{Addr, Api, HexBinary};
use k256::ecdsa::SigningKey;
use sha2::{Digest, Sha256};

use crate::{salt::SaltFields, signature::key_address};

/// secp256k1 key acting as a provider key or a registry signer in tests
pub struct TestKey {
    key: SigningKey,
}

impl TestKey {
    /// Derive a key deterministically from a human readable seed
    pub fn new(seed: &str) -> Self {
        let secret = Sha256::digest(seed.as_bytes());
        Self {
            key: SigningKey::from_slice(&secret).unwrap(),
        }
    }

    pub fn public_key(&self, compress: bool) -> Vec<u8> {
        self.key
            .verifying_key()
            .to_encoded_point(compress)
            .as_bytes()
            .to_vec()
    }

    pub fn address(&self, api: &dyn Api) -> Addr {
        key_address(api, &self.public_key(false)).unwrap()
    }

    /// Sign a 32 byte hash, returning `r || s || v`
    pub fn sign(&self, hash: &[u8]) -> HexBinary {
        let (signature, recovery_id) = self.key.sign_prehash_recoverable(hash).unwrap();

        let mut bytes = signature.to_bytes().to_vec();
        bytes.push(recovery_id.to_byte());
        HexBinary::from(bytes)
    }
}

/// Purpose 1 salt for (`factory`, `securer`, `user_id`, `user_index`)
pub fn test_salt(
    api: &dyn Api,
    factory: &Addr,
    securer: &Addr,
    user_id: u128,
    user_index: u64,
) -> HexBinary {
    SaltFields::new(api, factory, securer, user_id, user_index)
        .unwrap()
        .encode()
}
