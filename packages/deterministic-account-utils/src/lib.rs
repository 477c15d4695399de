pub mod derivation;
pub mod factory;
pub mod ownership;
pub mod salt;
pub mod securer;
pub mod signature;
pub mod signer;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
