// Purpose: Message types for the deterministic account factory
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, HexBinary};

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Deploy an account secured by the sender itself; no signature needed
    CreateAccount {
        factory: String,
        salt: HexBinary,
        transfer_ownership_code: Binary,
    },
    /// Deploy an account secured by `secured_by`, authorized by its `signature`
    /// over the deployment hash
    CreateSecuredAccount {
        factory: String,
        salt: HexBinary,
        secured_by: String,
        signature: HexBinary,
        transfer_ownership_code: Binary,
        /// Fail with `AddressMismatch` unless the account lands here
        expected_address: Option<String>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Address of the account for (`factory`, `secured_by`, `salt`), deployed or not
    #[returns(Addr)]
    GetDeterministicAddress {
        factory: String,
        secured_by: String,
        salt: HexBinary,
    },
    #[returns(bool)]
    HasValidSignature {
        factory: String,
        salt: HexBinary,
        transfer_ownership_code: Binary,
        secured_by: String,
        signature: HexBinary,
    },
    /// Hash `secured_by` signs to authorize a deployment
    #[returns(HexBinary)]
    DeploymentHash {
        factory: String,
        salt: HexBinary,
        transfer_ownership_code: Binary,
        secured_by: String,
    },
    #[returns(Option<DeployedAccount>)]
    DeployedAccount { address: String },
}

#[cw_serde]
pub struct DeployedAccount {
    pub factory: Addr,
    pub secured_by: Addr,
    pub code_id: u64,
}
