// Purpose: Account factory for the ownable account implementation
//
// Exposes the account factory query interface so the deterministic account
// factory can deploy ownable accounts, and offers plain Instantiate2 creation for
// users deploying their own account without a securer.

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    instantiate2_address, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo,
    Response, StdError, StdResult, WasmMsg,
};
use cw2::set_contract_version;
use deterministic_account_utils::factory::AccountInstantiation;
use sha2::{Digest, Sha256};

use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::ACCOUNT_CODE_ID;

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const ACCOUNT_LABEL: &str = "ownable_account";

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // Fail early on a code id the chain does not know
    deps.querier.query_wasm_code_info(msg.account_code_id)?;
    ACCOUNT_CODE_ID.save(deps.storage, &msg.account_code_id)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("account_code_id", msg.account_code_id.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::CreateAccount { owner, salt } => {
            let owner = deps.api.addr_validate(&owner)?;
            let code_id = ACCOUNT_CODE_ID.load(deps.storage)?;
            let account = account_address(deps.as_ref(), &env, &owner, &salt)?;

            let msg = WasmMsg::Instantiate2 {
                admin: None,
                code_id,
                label: ACCOUNT_LABEL.to_string(),
                msg: account_instantiate_msg(&owner)?,
                funds: info.funds,
                salt: owner_salt(deps.as_ref(), &owner, &salt)?,
            };

            Ok(Response::new()
                .add_message(msg)
                .set_data(to_json_binary(&account)?)
                .add_attribute("method", "create_account")
                .add_attribute("owner", owner)
                .add_attribute("account", account))
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::AccountCodeId {} => to_json_binary(&ACCOUNT_CODE_ID.load(deps.storage)?),
        QueryMsg::AccountInstantiation { owner } => {
            let owner = deps.api.addr_validate(&owner)?;
            to_json_binary(&AccountInstantiation {
                msg: account_instantiate_msg(&owner)?,
                label: ACCOUNT_LABEL.to_string(),
            })
        }
        QueryMsg::AccountAddress { owner, salt } => {
            let owner = deps.api.addr_validate(&owner)?;
            to_json_binary(&account_address(deps, &env, &owner, &salt)?)
        }
    }
}

fn account_instantiate_msg(owner: &Addr) -> StdResult<Binary> {
    to_json_binary(&ownable_account::msg::InstantiateMsg {
        owner: owner.to_string(),
    })
}

/// Instantiate2 salt of a directly created account, scoped to its owner
fn owner_salt(deps: Deps, owner: &Addr, salt: &Binary) -> StdResult<Binary> {
    let owner = deps.api.addr_canonicalize(owner.as_str())?;

    let mut hasher = Sha256::new();
    hasher.update(owner.as_slice());
    hasher.update(salt.as_slice());
    Ok(Binary::from(hasher.finalize().to_vec()))
}

fn account_address(deps: Deps, env: &Env, owner: &Addr, salt: &Binary) -> StdResult<Addr> {
    let code_id = ACCOUNT_CODE_ID.load(deps.storage)?;
    let checksum = deps.querier.query_wasm_code_info(code_id)?.checksum;
    let creator = deps.api.addr_canonicalize(env.contract.address.as_str())?;

    let canonical = instantiate2_address(
        checksum.as_slice(),
        &creator,
        owner_salt(deps, owner, salt)?.as_slice(),
    )
    .map_err(|err| StdError::generic_err(err.to_string()))?;

    deps.api.addr_humanize(&canonical)
}
