// Messages are shared with the deterministic account factory, which queries
// registries acting as securers.
pub use deterministic_account_utils::signer::{ExecuteMsg, InstantiateMsg, QueryMsg};
