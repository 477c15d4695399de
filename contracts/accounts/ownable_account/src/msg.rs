// Purpose: Message types for the ownable account contract
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::CosmosMsg;
use cw_ownable::{cw_ownable_execute, cw_ownable_query};

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
}

#[cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    /// Replace the owner immediately (only owner)
    TransferOwnership { new_owner: String },
    /// Execute messages on behalf of the account (only owner)
    Execute { msgs: Vec<CosmosMsg> },
}

#[cw_ownable_query]
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {}
