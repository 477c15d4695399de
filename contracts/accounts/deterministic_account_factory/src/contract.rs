// Purpose: Deterministic account factory contract
//
// An account is deployed with Instantiate2 at the address derived from
// (SCA factory, securer, salt). The factory instantiates it as its own initial
// owner and immediately executes the caller's `transfer_ownership_code` on it.
// Both are messages of the same transaction, so a failing handover reverts the
// deployment too.

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Coin, Deps, DepsMut, Env, HexBinary, MessageInfo, Response,
    StdResult, WasmMsg,
};
use cw2::set_contract_version;
use deterministic_account_utils::{
    derivation::{account_salt, deterministic_address},
    factory::{AccountFactoryQueryMsg, AccountInstantiation},
    salt::SaltFields,
    securer::verify_deployment,
    signature::deployment_hash,
};

use crate::error::ContractError;
use crate::msg::{DeployedAccount, ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{ACCOUNTS, DEPLOYMENTS};

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> StdResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new().add_attribute("method", "instantiate"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateAccount {
            factory,
            salt,
            transfer_ownership_code,
        } => {
            let deployment = Deployment {
                factory: deps.api.addr_validate(&factory)?,
                salt,
                secured_by: info.sender,
                transfer_ownership_code,
            };
            execute::create_account(deps, env, info.funds, deployment)
        }
        ExecuteMsg::CreateSecuredAccount {
            factory,
            salt,
            secured_by,
            signature,
            transfer_ownership_code,
            expected_address,
        } => {
            let deployment = Deployment {
                factory: deps.api.addr_validate(&factory)?,
                salt,
                secured_by: deps.api.addr_validate(&secured_by)?,
                transfer_ownership_code,
            };
            let expected_address = expected_address
                .map(|addr| deps.api.addr_validate(&addr))
                .transpose()?;
            execute::create_secured_account(
                deps,
                env,
                info.funds,
                deployment,
                signature,
                expected_address,
            )
        }
    }
}

/// Arguments identifying one deployment
pub struct Deployment {
    pub factory: Addr,
    pub salt: HexBinary,
    pub secured_by: Addr,
    pub transfer_ownership_code: Binary,
}

mod execute {
    use super::*;

    pub fn create_account(
        deps: DepsMut,
        env: Env,
        funds: Vec<Coin>,
        deployment: Deployment,
    ) -> Result<Response, ContractError> {
        let target = resolve_target(
            deps.as_ref(),
            &env,
            &deployment.factory,
            &deployment.secured_by,
            &deployment.salt,
        )?;
        assert_not_deployed(deps.as_ref(), &target)?;

        deploy(deps, env, funds, deployment, target, "create_account")
    }

    pub fn create_secured_account(
        deps: DepsMut,
        env: Env,
        funds: Vec<Coin>,
        deployment: Deployment,
        signature: HexBinary,
        expected_address: Option<Addr>,
    ) -> Result<Response, ContractError> {
        let target = resolve_target(
            deps.as_ref(),
            &env,
            &deployment.factory,
            &deployment.secured_by,
            &deployment.salt,
        )?;

        if let Some(expected) = expected_address {
            if expected != target.address {
                return Err(ContractError::AddressMismatch {
                    expected,
                    actual: target.address,
                });
            }
        }

        assert_not_deployed(deps.as_ref(), &target)?;

        let authorized = verify_deployment(
            deps.as_ref(),
            &deployment.factory,
            &deployment.salt,
            &deployment.transfer_ownership_code,
            &deployment.secured_by,
            &signature,
        )?;
        if !authorized {
            return Err(ContractError::InvalidSignature {});
        }

        deploy(deps, env, funds, deployment, target, "create_secured_account")
    }

    /// One shot per (factory, securer, salt), even if the factory later
    /// reports another code id
    fn assert_not_deployed(deps: Deps, target: &Target) -> Result<(), ContractError> {
        if DEPLOYMENTS.has(deps.storage, target.account_salt.as_slice())
            || deps.querier.query_wasm_contract_info(&target.address).is_ok()
        {
            return Err(ContractError::AlreadyDeployed {
                account: target.address.clone(),
            });
        }
        Ok(())
    }

    fn deploy(
        deps: DepsMut,
        env: Env,
        funds: Vec<Coin>,
        deployment: Deployment,
        target: Target,
        method: &str,
    ) -> Result<Response, ContractError> {
        let AccountInstantiation { msg, label } = deps.querier.query_wasm_smart(
            &deployment.factory,
            &AccountFactoryQueryMsg::AccountInstantiation {
                owner: env.contract.address.to_string(),
            },
        )?;

        let instantiate = WasmMsg::Instantiate2 {
            admin: None,
            code_id: target.code_id,
            label,
            msg,
            funds,
            salt: target.account_salt.clone(),
        };
        // Runs right after the instantiation, with the factory as owner
        let handover = WasmMsg::Execute {
            contract_addr: target.address.to_string(),
            msg: deployment.transfer_ownership_code,
            funds: vec![],
        };

        DEPLOYMENTS.save(deps.storage, target.account_salt.as_slice(), &target.address)?;
        ACCOUNTS.save(
            deps.storage,
            &target.address,
            &DeployedAccount {
                factory: deployment.factory.clone(),
                secured_by: deployment.secured_by.clone(),
                code_id: target.code_id,
            },
        )?;

        Ok(Response::new()
            .add_message(instantiate)
            .add_message(handover)
            .set_data(to_json_binary(&target.address)?)
            .add_attribute("method", method)
            .add_attribute("account", target.address)
            .add_attribute("factory", deployment.factory)
            .add_attribute("secured_by", deployment.secured_by)
            .add_attribute("code_id", target.code_id.to_string()))
    }
}

/// Where and with which code an account gets deployed
pub struct Target {
    pub address: Addr,
    pub code_id: u64,
    pub account_salt: Binary,
}

/// Once deployed, the recorded address is returned instead of a fresh derivation
fn resolve_target(
    deps: Deps,
    env: &Env,
    factory: &Addr,
    secured_by: &Addr,
    salt: &[u8],
) -> Result<Target, ContractError> {
    SaltFields::decode(salt).map_err(|err| ContractError::InvalidSalt(err.to_string()))?;

    let account_salt = account_salt(deps.api, factory, secured_by, salt)?;

    if let Some(address) = DEPLOYMENTS.may_load(deps.storage, account_salt.as_slice())? {
        let code_id = ACCOUNTS.load(deps.storage, &address)?.code_id;
        return Ok(Target {
            address,
            code_id,
            account_salt,
        });
    }

    let code_id: u64 = deps
        .querier
        .query_wasm_smart(factory, &AccountFactoryQueryMsg::AccountCodeId {})?;
    let checksum = deps.querier.query_wasm_code_info(code_id)?.checksum;

    let address = deterministic_address(
        deps.api,
        &env.contract.address,
        checksum.as_slice(),
        factory,
        secured_by,
        salt,
    )?;

    Ok(Target {
        address,
        code_id,
        account_salt,
    })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::GetDeterministicAddress {
            factory,
            secured_by,
            salt,
        } => {
            let target = resolve_target(
                deps,
                &env,
                &deps.api.addr_validate(&factory)?,
                &deps.api.addr_validate(&secured_by)?,
                &salt,
            )?;
            Ok(to_json_binary(&target.address)?)
        }
        QueryMsg::HasValidSignature {
            factory,
            salt,
            transfer_ownership_code,
            secured_by,
            signature,
        } => {
            let valid = verify_deployment(
                deps,
                &deps.api.addr_validate(&factory)?,
                &salt,
                &transfer_ownership_code,
                &deps.api.addr_validate(&secured_by)?,
                &signature,
            )?;
            Ok(to_json_binary(&valid)?)
        }
        QueryMsg::DeploymentHash {
            factory,
            salt,
            transfer_ownership_code,
            secured_by,
        } => {
            let hash = deployment_hash(
                deps.api,
                &deps.api.addr_validate(&factory)?,
                &salt,
                &transfer_ownership_code,
                &deps.api.addr_validate(&secured_by)?,
            )?;
            Ok(to_json_binary(&HexBinary::from(hash))?)
        }
        QueryMsg::DeployedAccount { address } => {
            let address = deps.api.addr_validate(&address)?;
            Ok(to_json_binary(&ACCOUNTS.may_load(deps.storage, &address)?)?)
        }
    }
}
