// Purpose: Message interface of the deterministic account signer registry
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, HexBinary, Timestamp};
use cw_ownable::{cw_ownable_execute, cw_ownable_query};

/// Returned by `is_valid_signature` for an accepted signature
pub const MAGIC_VALUE: [u8; 4] = [0x16, 0x26, 0xba, 0x7e];
/// Returned by `is_valid_signature_message` for an accepted signature
pub const LEGACY_MAGIC_VALUE: [u8; 4] = [0x20, 0xc1, 0x3b, 0x0b];
/// Returned by both validation queries for anything else
pub const INVALID_SIGNATURE: [u8; 4] = [0x00; 4];

#[cw_serde]
pub struct InstantiateMsg {
    /// Initialize right away; otherwise `Initialize` must be called once
    pub owner: Option<String>,
}

#[cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    /// Set the registry owner (only once)
    Initialize { owner: String },
    /// Insert or overwrite a signer (only owner)
    AddSigner {
        signer: String,
        expiration: Timestamp,
    },
    /// Delete a signer, no-op if absent (only owner)
    RemoveSigner { signer: String },
}

#[cw_ownable_query]
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Stored signers, expired or not, in address order. Without a `limit`
    /// every signer after `start_after` is returned
    #[returns(Vec<Addr>)]
    GetSigners {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(Option<Timestamp>)]
    GetExpiration { signer: String },
    #[returns(bool)]
    IsValidSigner { signer: String },
    /// Validate a signature over a 32 byte hash
    #[returns(HexBinary)]
    IsValidSignature {
        hash: HexBinary,
        signature: HexBinary,
    },
    /// Validate a signature over `sha256(message)`
    #[returns(HexBinary)]
    IsValidSignatureMessage {
        message: Binary,
        signature: HexBinary,
    },
}
