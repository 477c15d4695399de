//! Ownable Account Contract
//!
//! Minimal smart contract account owned by a single address. Ownership can be
//! handed over in one step, which is what the deterministic account factory
//! relies on to pass a freshly deployed account to its final owner.
pub mod contract;
pub mod error;
pub mod msg;
