// Purpose: Signature validation against a securer of either kind
//
// A securer hosting a contract validates signatures itself through the signer
// registry query interface; any other address is treated as a secp256k1 key.
use cosmwasm_std::{Addr, Deps, HexBinary, StdResult};

use crate::{
    signature::{deployment_hash, recover_signer},
    signer::{QueryMsg as SignerQueryMsg, MAGIC_VALUE},
};

pub trait SignatureValidator {
    /// Whether `signature` authorizes `hash`. Never errors on a bad signature.
    fn is_valid_signature(&self, deps: Deps, hash: &[u8], signature: &[u8]) -> bool;
}

/// Securer backed by a single secp256k1 key
pub struct KeySecurer {
    address: Addr,
}

impl SignatureValidator for KeySecurer {
    fn is_valid_signature(&self, deps: Deps, hash: &[u8], signature: &[u8]) -> bool {
        recover_signer(deps.api, hash, signature).is_some_and(|signer| signer == self.address)
    }
}

/// Securer contract that answers the signer registry `IsValidSignature` query
pub struct ContractSecurer {
    address: Addr,
}

impl SignatureValidator for ContractSecurer {
    fn is_valid_signature(&self, deps: Deps, hash: &[u8], signature: &[u8]) -> bool {
        deps.querier
            .query_wasm_smart::<HexBinary>(
                &self.address,
                &SignerQueryMsg::IsValidSignature {
                    hash: HexBinary::from(hash),
                    signature: HexBinary::from(signature),
                },
            )
            .is_ok_and(|value| value.as_slice() == MAGIC_VALUE)
    }
}

/// Pick the validator for `securer` based on whether a contract lives there
pub fn resolve_securer(deps: Deps, securer: Addr) -> Box<dyn SignatureValidator> {
    if deps.querier.query_wasm_contract_info(&securer).is_ok() {
        Box::new(ContractSecurer { address: securer })
    } else {
        Box::new(KeySecurer { address: securer })
    }
}

/// Whether `secured_by` authorized deploying with exactly these arguments
pub fn verify_deployment(
    deps: Deps,
    factory: &Addr,
    salt: &[u8],
    transfer_ownership_code: &[u8],
    secured_by: &Addr,
    signature: &[u8],
) -> StdResult<bool> {
    let hash = deployment_hash(deps.api, factory, salt, transfer_ownership_code, secured_by)?;

    Ok(resolve_securer(deps, secured_by.clone()).is_valid_signature(deps, &hash, signature))
}
