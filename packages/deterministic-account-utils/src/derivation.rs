// Purpose: Deterministic account address derivation
//
// The account address is the Instantiate2 address of the deterministic factory
// using a salt that commits to the SCA factory, the securer and the provider salt.
// Everything here is pure and can be recomputed off-chain from public data.
use cosmwasm_std::{instantiate2_address, Addr, Api, Binary, StdError, StdResult};
use sha2::{Digest, Sha256};

const DERIVATION_DOMAIN: &[u8] = b"deterministic-account/derivation";

/// Hash `factory`, `securer` and `salt` into the Instantiate2 salt
pub fn account_salt(
    api: &dyn Api,
    factory: &Addr,
    securer: &Addr,
    salt: &[u8],
) -> StdResult<Binary> {
    let factory = api.addr_canonicalize(factory.as_str())?;
    let securer = api.addr_canonicalize(securer.as_str())?;

    let mut hasher = Sha256::new();
    hasher.update(DERIVATION_DOMAIN);
    update_prefixed(&mut hasher, factory.as_slice());
    update_prefixed(&mut hasher, securer.as_slice());
    update_prefixed(&mut hasher, salt);

    Ok(Binary::from(hasher.finalize().to_vec()))
}

/// Compute the address an account gets when `deployer` instantiates the code
/// with `checksum` for (`factory`, `securer`, `salt`)
pub fn deterministic_address(
    api: &dyn Api,
    deployer: &Addr,
    checksum: &[u8],
    factory: &Addr,
    securer: &Addr,
    salt: &[u8],
) -> StdResult<Addr> {
    let account_salt = account_salt(api, factory, securer, salt)?;
    let creator = api.addr_canonicalize(deployer.as_str())?;

    let canonical = instantiate2_address(checksum, &creator, account_salt.as_slice())
        .map_err(|err| StdError::generic_err(err.to_string()))?;

    api.addr_humanize(&canonical)
}

/// Feed a length-prefixed field so adjacent fields cannot be shifted into each other
pub(crate) fn update_prefixed(hasher: &mut Sha256, field: &[u8]) {
    hasher.update((field.len() as u32).to_be_bytes());
    hasher.update(field);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockApi;

    const CHECKSUM: [u8; 32] = [7u8; 32];

    struct Inputs {
        api: MockApi,
        deployer: Addr,
        factory: Addr,
        securer: Addr,
    }

    impl Inputs {
        fn new() -> Self {
            let api = MockApi::default();
            Self {
                deployer: api.addr_make("deterministic_factory"),
                factory: api.addr_make("account_factory"),
                securer: api.addr_make("securer"),
                api,
            }
        }

        fn derive(&self, factory: &Addr, securer: &Addr, salt: &[u8]) -> Addr {
            deterministic_address(
                &self.api,
                &self.deployer,
                &CHECKSUM,
                factory,
                securer,
                salt,
            )
            .unwrap()
        }
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let inputs = Inputs::new();
        let salt = [1u8; 96];

        let first = inputs.derive(&inputs.factory, &inputs.securer, &salt);
        let second = inputs.derive(&inputs.factory, &inputs.securer, &salt);

        assert_eq!(first, second);
    }

    #[test]
    fn test_every_input_changes_the_address() {
        let inputs = Inputs::new();
        let salt = [1u8; 96];
        let base = inputs.derive(&inputs.factory, &inputs.securer, &salt);

        let other = inputs.api.addr_make("other");
        assert_ne!(base, inputs.derive(&other, &inputs.securer, &salt));
        assert_ne!(base, inputs.derive(&inputs.factory, &other, &salt));

        for i in 0..salt.len() {
            let mut changed = salt;
            changed[i] ^= 0x01;
            assert_ne!(
                base,
                inputs.derive(&inputs.factory, &inputs.securer, &changed)
            );
        }
    }

    #[test]
    fn test_factory_and_securer_are_not_interchangeable() {
        let inputs = Inputs::new();
        let salt = [1u8; 96];

        assert_ne!(
            inputs.derive(&inputs.factory, &inputs.securer, &salt),
            inputs.derive(&inputs.securer, &inputs.factory, &salt)
        );
    }
}
