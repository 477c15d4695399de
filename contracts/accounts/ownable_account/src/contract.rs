// Purpose: Ownable account contract with single step ownership handover
//
// The account starts out owned by whoever instantiated it on the owner's behalf
// (typically the deterministic account factory) and is handed to its final owner
// with `TransferOwnership`. Afterwards only the owner can make it act.

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    cw_ownable::initialize_owner(deps.storage, deps.api, Some(&msg.owner))?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", msg.owner))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute::transfer_ownership(deps, info, new_owner)
        }
        ExecuteMsg::Execute { msgs } => execute::execute_msgs(deps, info, msgs),
        ExecuteMsg::UpdateOwnership(action) => {
            let ownership = cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;
            Ok(Response::new().add_attributes(ownership.into_attributes()))
        }
    }
}

mod execute {
    use cosmwasm_std::{CosmosMsg, DepsMut, MessageInfo, Response};

    use crate::error::ContractError;

    /// Replace the owner without an acceptance step.
    ///
    /// Any pending two-step transfer is discarded along with the old owner.
    pub fn transfer_ownership(
        deps: DepsMut,
        info: MessageInfo,
        new_owner: String,
    ) -> Result<Response, ContractError> {
        cw_ownable::assert_owner(deps.storage, &info.sender)?;

        let ownership = cw_ownable::initialize_owner(deps.storage, deps.api, Some(&new_owner))?;

        Ok(Response::new()
            .add_attribute("method", "transfer_ownership")
            .add_attribute("previous_owner", info.sender)
            .add_attributes(ownership.into_attributes()))
    }

    pub fn execute_msgs(
        deps: DepsMut,
        info: MessageInfo,
        msgs: Vec<CosmosMsg>,
    ) -> Result<Response, ContractError> {
        cw_ownable::assert_owner(deps.storage, &info.sender)?;

        Ok(Response::new()
            .add_messages(msgs)
            .add_attribute("method", "execute")
            .add_attribute("sender", info.sender))
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Ownership {} => to_json_binary(&cw_ownable::get_ownership(deps.storage)?),
    }
}
