use cosmwasm_std::StdError;
use cw_ownable::OwnershipError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Ownership(#[from] OwnershipError),

    #[error("Signer registry is not initialized")]
    NotInitialized {},

    #[error("Signer registry is already initialized")]
    AlreadyInitialized {},

    #[error("Unauthorized: only the registry owner can do this")]
    Unauthorized {},
}
