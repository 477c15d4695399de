#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, HexBinary, MessageInfo, Response, Storage,
};
use cw2::set_contract_version;
use deterministic_account_utils::signer::{INVALID_SIGNATURE, LEGACY_MAGIC_VALUE, MAGIC_VALUE};

use crate::{
    error::ContractError,
    msg::{ExecuteMsg, InstantiateMsg, QueryMsg},
    state::SIGNERS,
};

// version info for migration info
const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let mut response = Response::new().add_attribute("method", "instantiate");
    if let Some(owner) = msg.owner {
        cw_ownable::initialize_owner(deps.storage, deps.api, Some(&owner))?;
        response = response.add_attribute("owner", owner);
    }

    Ok(response)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Initialize { owner } => execute::initialize(deps, owner),
        ExecuteMsg::AddSigner { signer, expiration } => {
            assert_registry_owner(deps.as_ref(), &info)?;
            execute::add_signer(deps, signer, expiration)
        }
        ExecuteMsg::RemoveSigner { signer } => {
            assert_registry_owner(deps.as_ref(), &info)?;
            execute::remove_signer(deps, signer)
        }
        ExecuteMsg::UpdateOwnership(action) => {
            assert_initialized(deps.storage)?;
            let ownership = cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;
            Ok(Response::new().add_attributes(ownership.into_attributes()))
        }
    }
}

fn assert_initialized(storage: &dyn Storage) -> Result<(), ContractError> {
    // Ownership is only ever stored by initialization
    if cw_ownable::get_ownership(storage).is_err() {
        return Err(ContractError::NotInitialized {});
    }
    Ok(())
}

fn assert_registry_owner(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    assert_initialized(deps.storage)?;
    if !cw_ownable::is_owner(deps.storage, &info.sender)? {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

mod execute {
    use cosmwasm_std::{DepsMut, Response, Timestamp};

    use crate::{error::ContractError, state::SIGNERS};

    pub fn initialize(deps: DepsMut, owner: String) -> Result<Response, ContractError> {
        if cw_ownable::get_ownership(deps.storage).is_ok() {
            return Err(ContractError::AlreadyInitialized {});
        }

        cw_ownable::initialize_owner(deps.storage, deps.api, Some(&owner))?;

        Ok(Response::new()
            .add_attribute("method", "initialize")
            .add_attribute("owner", owner))
    }

    pub fn add_signer(
        deps: DepsMut,
        signer: String,
        expiration: Timestamp,
    ) -> Result<Response, ContractError> {
        let signer = deps.api.addr_validate(&signer)?;
        SIGNERS.save(deps.storage, &signer, &expiration)?;

        Ok(Response::new()
            .add_attribute("method", "add_signer")
            .add_attribute("signer", signer)
            .add_attribute("expiration", expiration.to_string()))
    }

    pub fn remove_signer(deps: DepsMut, signer: String) -> Result<Response, ContractError> {
        let signer = deps.api.addr_validate(&signer)?;
        SIGNERS.remove(deps.storage, &signer);

        Ok(Response::new()
            .add_attribute("method", "remove_signer")
            .add_attribute("signer", signer))
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    assert_initialized(deps.storage)?;

    let res = match msg {
        QueryMsg::Ownership {} => to_json_binary(&cw_ownable::get_ownership(deps.storage)?),
        QueryMsg::GetSigners { start_after, limit } => {
            let start_after = start_after
                .map(|signer| deps.api.addr_validate(&signer))
                .transpose()?;
            to_json_binary(&query::signers(deps, start_after, limit)?)
        }
        QueryMsg::GetExpiration { signer } => {
            let signer = deps.api.addr_validate(&signer)?;
            to_json_binary(&SIGNERS.may_load(deps.storage, &signer)?)
        }
        QueryMsg::IsValidSigner { signer } => {
            let signer = deps.api.addr_validate(&signer)?;
            to_json_binary(&query::is_valid_signer(deps, &env, &signer)?)
        }
        QueryMsg::IsValidSignature { hash, signature } => {
            let valid = query::is_valid_signature(deps, &env, &hash, &signature)?;
            to_json_binary(&magic_or_failure(valid, MAGIC_VALUE))
        }
        QueryMsg::IsValidSignatureMessage { message, signature } => {
            let hash = query::message_hash(&message);
            let valid = query::is_valid_signature(deps, &env, &hash, &signature)?;
            to_json_binary(&magic_or_failure(valid, LEGACY_MAGIC_VALUE))
        }
    }?;

    Ok(res)
}

fn magic_or_failure(valid: bool, magic: [u8; 4]) -> HexBinary {
    if valid {
        HexBinary::from(magic)
    } else {
        HexBinary::from(INVALID_SIGNATURE)
    }
}

mod query {
    use cosmwasm_std::{Addr, Deps, Env, Order, StdResult};
    use cw_storage_plus::Bound;
    use deterministic_account_utils::signature::recover_signer;
    use sha2::{Digest, Sha256};

    use crate::state::SIGNERS;

    pub fn signers(
        deps: Deps,
        start_after: Option<Addr>,
        limit: Option<u32>,
    ) -> StdResult<Vec<Addr>> {
        let start = start_after.as_ref().map(Bound::exclusive);
        let signers = SIGNERS.keys(deps.storage, start, None, Order::Ascending);

        match limit {
            Some(limit) => signers.take(limit as usize).collect(),
            None => signers.collect(),
        }
    }

    /// Present and not yet expired; a signer is invalid from its expiration on
    pub fn is_valid_signer(deps: Deps, env: &Env, signer: &Addr) -> StdResult<bool> {
        Ok(SIGNERS
            .may_load(deps.storage, signer)?
            .is_some_and(|expiration| env.block.time < expiration))
    }

    pub fn is_valid_signature(
        deps: Deps,
        env: &Env,
        hash: &[u8],
        signature: &[u8],
    ) -> StdResult<bool> {
        if hash.len() != 32 {
            return Ok(false);
        }

        match recover_signer(deps.api, hash, signature) {
            Some(signer) => is_valid_signer(deps, env, &signer),
            None => Ok(false),
        }
    }

    pub fn message_hash(message: &[u8]) -> [u8; 32] {
        Sha256::digest(message).into()
    }
}
