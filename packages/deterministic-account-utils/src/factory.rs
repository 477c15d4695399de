// Purpose: Query interface every account implementation factory exposes
//
// The deterministic factory deploys the account code itself; the SCA factory
// only tells it which code to use and how that code is instantiated.
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;

#[cw_serde]
#[derive(QueryResponses)]
pub enum AccountFactoryQueryMsg {
    /// Code id of the account implementation
    #[returns(u64)]
    AccountCodeId {},
    /// Instantiate message for an account initially owned by `owner`
    #[returns(AccountInstantiation)]
    AccountInstantiation { owner: String },
}

#[cw_serde]
pub struct AccountInstantiation {
    pub msg: Binary,
    pub label: String,
}
