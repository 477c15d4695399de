// Purpose: Deployment authorization messages and secp256k1 signer recovery
use cosmwasm_std::{Addr, Api, CanonicalAddr, StdError, StdResult};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::derivation::update_prefixed;

const DEPLOYMENT_DOMAIN: &[u8] = b"deterministic-account/deployment";

/// `r || s || v`
pub const SIGNATURE_LENGTH: usize = 65;

/// Hash a securer signs to authorize one deployment.
///
/// Binds the SCA factory, the salt, the exact ownership transfer message and the
/// securer, so a signature cannot be replayed for any other deployment message
/// at the same address.
pub fn deployment_hash(
    api: &dyn Api,
    factory: &Addr,
    salt: &[u8],
    transfer_ownership_code: &[u8],
    secured_by: &Addr,
) -> StdResult<[u8; 32]> {
    let factory = api.addr_canonicalize(factory.as_str())?;
    let secured_by = api.addr_canonicalize(secured_by.as_str())?;

    let mut hasher = Sha256::new();
    hasher.update(DEPLOYMENT_DOMAIN);
    update_prefixed(&mut hasher, factory.as_slice());
    update_prefixed(&mut hasher, salt);
    update_prefixed(&mut hasher, transfer_ownership_code);
    update_prefixed(&mut hasher, secured_by.as_slice());

    Ok(hasher.finalize().into())
}

/// A 65 byte recoverable secp256k1 signature
pub struct RecoverableSignature<'a> {
    rs: &'a [u8],
    recovery_param: u8,
}

impl<'a> RecoverableSignature<'a> {
    /// Accepts both raw (0/1) and Ethereum style (27/28) recovery ids
    pub fn parse(signature: &'a [u8]) -> Option<Self> {
        if signature.len() != SIGNATURE_LENGTH {
            return None;
        }

        let recovery_param = match signature[64] {
            0 | 27 => 0,
            1 | 28 => 1,
            _ => return None,
        };

        Some(Self {
            rs: &signature[..64],
            recovery_param,
        })
    }
}

/// Recover the address of the key that produced `signature` over `hash`.
///
/// Returns `None` for anything that does not recover to a key.
pub fn recover_signer(api: &dyn Api, hash: &[u8], signature: &[u8]) -> Option<Addr> {
    let signature = RecoverableSignature::parse(signature)?;
    let pubkey = api
        .secp256k1_recover_pubkey(hash, signature.rs, signature.recovery_param)
        .ok()?;

    key_address(api, &pubkey).ok()
}

/// Account address of a secp256k1 public key: `ripemd160(sha256(compressed key))`
pub fn key_address(api: &dyn Api, pubkey: &[u8]) -> StdResult<Addr> {
    let compressed = compressed_pubkey(pubkey)?;
    let hash = Ripemd160::digest(Sha256::digest(compressed));

    api.addr_humanize(&CanonicalAddr::from(hash.as_slice()))
}

fn compressed_pubkey(pubkey: &[u8]) -> StdResult<Vec<u8>> {
    match pubkey.len() {
        33 => Ok(pubkey.to_vec()),
        65 if pubkey[0] == 0x04 => {
            let mut compressed = Vec::with_capacity(33);
            compressed.push(0x02 | (pubkey[64] & 0x01));
            compressed.extend_from_slice(&pubkey[1..33]);
            Ok(compressed)
        }
        len => Err(StdError::generic_err(format!(
            "Invalid secp256k1 public key of {len} bytes"
        ))),
    }
}
