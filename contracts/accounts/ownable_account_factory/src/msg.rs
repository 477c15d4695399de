// Purpose: Message types for the ownable account factory
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};
use deterministic_account_utils::factory::AccountInstantiation;

#[cw_serde]
pub struct InstantiateMsg {
    pub account_code_id: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Deploy an account owned by `owner` directly, without a securer
    CreateAccount { owner: String, salt: Binary },
}

/// Superset of the account factory query interface
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(u64)]
    AccountCodeId {},
    #[returns(AccountInstantiation)]
    AccountInstantiation { owner: String },
    /// Address `CreateAccount` would produce
    #[returns(Addr)]
    AccountAddress { owner: String, salt: Binary },
}
