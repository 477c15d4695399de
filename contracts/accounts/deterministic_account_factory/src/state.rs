use cosmwasm_std::Addr;
use cw_storage_plus::Map;

use crate::msg::DeployedAccount;

// Accounts deployed through this factory, by address
pub const ACCOUNTS: Map<&Addr, DeployedAccount> = Map::new("accounts");
// Deployed address per Instantiate2 salt, i.e. per (factory, securer, salt)
pub const DEPLOYMENTS: Map<&[u8], Addr> = Map::new("deployments");
