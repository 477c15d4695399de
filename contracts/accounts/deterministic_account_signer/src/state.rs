use cosmwasm_std::{Addr, Timestamp};
use cw_storage_plus::Map;

// Signer keys and the time at which each stops being valid
pub const SIGNERS: Map<&Addr, Timestamp> = Map::new("signers");
