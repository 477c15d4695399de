//! Deterministic Account Factory
//!
//! Deploys smart contract accounts whose address is fixed in advance by
//! (SCA factory, securer, salt). Deployment needs the securer's authorization,
//! and the new account is handed to its final owner in the same transaction.
pub mod contract;
pub mod error;
pub mod msg;
pub mod state;
