// Purpose: Entry point for the ownable account factory modules
pub mod contract;
pub mod msg;
pub mod state;
