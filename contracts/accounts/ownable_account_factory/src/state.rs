use cw_storage_plus::Item;

/// Code id of the ownable account contract this factory deploys
pub const ACCOUNT_CODE_ID: Item<u64> = Item::new("account_code_id");
