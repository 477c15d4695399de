// Purpose: Binary layout of deterministic account salts
//
// A salt is the big-endian concatenation
// `tag || purpose || factory || securer || user_id || user_index`.
// Field widths are fixed by the purpose (layout version); only purpose 1 exists.
use cosmwasm_std::{Addr, Api, HexBinary, StdError, StdResult};
use thiserror::Error;

/// Tag identifying the deterministic account salt scheme
pub const SALT_TAG: [u8; 4] = *b"DASL";
/// First (and only) layout version
pub const SALT_PURPOSE_V1: u32 = 1;
/// Total width of a purpose 1 salt
pub const SALT_LENGTH: usize = 96;

/// Width of the address fields; shorter canonical addresses are left-padded
const ADDRESS_WIDTH: usize = 32;

#[derive(Error, Debug, PartialEq)]
pub enum SaltError {
    #[error("Salt must be 96 bytes, got {0}")]
    InvalidLength(usize),

    #[error("Unknown salt tag {0:02x?}")]
    UnknownTag([u8; 4]),

    #[error("Unsupported salt purpose {0}")]
    UnsupportedPurpose(u32),

    #[error("Canonical address of {0} bytes does not fit a salt field")]
    AddressTooLong(usize),
}

impl From<SaltError> for StdError {
    fn from(err: SaltError) -> Self {
        StdError::generic_err(err.to_string())
    }
}

/// Decoded fields of a purpose 1 salt
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaltFields {
    pub purpose: u32,
    pub factory: [u8; ADDRESS_WIDTH],
    pub securer: [u8; ADDRESS_WIDTH],
    pub user_id: u128,
    pub user_index: u64,
}

impl SaltFields {
    pub fn new(
        api: &dyn Api,
        factory: &Addr,
        securer: &Addr,
        user_id: u128,
        user_index: u64,
    ) -> StdResult<Self> {
        Ok(Self {
            purpose: SALT_PURPOSE_V1,
            factory: padded_address(api, factory)?,
            securer: padded_address(api, securer)?,
            user_id,
            user_index,
        })
    }

    pub fn encode(&self) -> HexBinary {
        let mut salt = Vec::with_capacity(SALT_LENGTH);
        salt.extend_from_slice(&SALT_TAG);
        salt.extend_from_slice(&self.purpose.to_be_bytes());
        salt.extend_from_slice(&self.factory);
        salt.extend_from_slice(&self.securer);
        salt.extend_from_slice(&self.user_id.to_be_bytes());
        salt.extend_from_slice(&self.user_index.to_be_bytes());
        HexBinary::from(salt)
    }

    pub fn decode(salt: &[u8]) -> Result<Self, SaltError> {
        if salt.len() != SALT_LENGTH {
            return Err(SaltError::InvalidLength(salt.len()));
        }

        let mut reader = FieldReader { bytes: salt, offset: 0 };

        let tag: [u8; 4] = reader.take();
        if tag != SALT_TAG {
            return Err(SaltError::UnknownTag(tag));
        }

        let purpose = u32::from_be_bytes(reader.take());
        if purpose != SALT_PURPOSE_V1 {
            return Err(SaltError::UnsupportedPurpose(purpose));
        }

        Ok(Self {
            purpose,
            factory: reader.take(),
            securer: reader.take(),
            user_id: u128::from_be_bytes(reader.take()),
            user_index: u64::from_be_bytes(reader.take()),
        })
    }

    /// Whether the embedded factory and securer fields name the given addresses
    pub fn is_bound_to(&self, api: &dyn Api, factory: &Addr, securer: &Addr) -> StdResult<bool> {
        Ok(self.factory == padded_address(api, factory)?
            && self.securer == padded_address(api, securer)?)
    }
}

struct FieldReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl FieldReader<'_> {
    // Callers check the total length up front
    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut field = [0u8; N];
        field.copy_from_slice(&self.bytes[self.offset..self.offset + N]);
        self.offset += N;
        field
    }
}

fn padded_address(api: &dyn Api, addr: &Addr) -> StdResult<[u8; ADDRESS_WIDTH]> {
    let canonical = api.addr_canonicalize(addr.as_str())?;
    let len = canonical.len();
    if len > ADDRESS_WIDTH {
        return Err(SaltError::AddressTooLong(len).into());
    }

    let mut field = [0u8; ADDRESS_WIDTH];
    field[ADDRESS_WIDTH - len..].copy_from_slice(canonical.as_slice());
    Ok(field)
}
