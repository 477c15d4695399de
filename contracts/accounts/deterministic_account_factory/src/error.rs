use cosmwasm_std::{Addr, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Account already deployed at {account}")]
    AlreadyDeployed { account: Addr },

    #[error("Securer did not authorize this deployment")]
    InvalidSignature {},

    #[error("Derived address {actual} does not match expected address {expected}")]
    AddressMismatch { expected: Addr, actual: Addr },

    #[error("Invalid salt: {0}")]
    InvalidSalt(String),
}
