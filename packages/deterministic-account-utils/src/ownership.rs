// Purpose: Ownership transfer messages per supported account implementation
//
// The deterministic factory forwards `transfer_ownership_code` without reading it.
// Callers build it here; supporting a new implementation means adding a variant.
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Binary, StdResult};

#[cw_serde]
#[derive(Copy)]
pub enum AccountKind {
    /// `ownable-account`: single step `transfer_ownership`
    Ownable,
}

#[cw_serde]
enum OwnableAccountMsg {
    TransferOwnership { new_owner: String },
}

impl AccountKind {
    /// Message that hands the account over to `new_owner`
    pub fn transfer_ownership_code(&self, new_owner: &str) -> StdResult<Binary> {
        match self {
            AccountKind::Ownable => to_json_binary(&OwnableAccountMsg::TransferOwnership {
                new_owner: new_owner.to_string(),
            }),
        }
    }
}
