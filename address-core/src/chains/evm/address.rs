// address-core/src/chains/evm/address.rs
//
// EVM Address value type - 20 raw bytes
//
// Raw form  : "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed" (comparison / storage)
// Display   : "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed" (EIP-55, see `checksum`)

use crate::codec::HexCodec;
use crate::crypto::DIGEST_LEN;
use crate::error::{AddressError, AddressResult, HexError};
use std::fmt;
use std::str::FromStr;

/// Address length in bytes.
pub const ADDRESS_LEN: usize = 20;
/// Address length in hex digits (without prefix).
pub const ADDRESS_HEX_LEN: usize = ADDRESS_LEN * 2;
/// Address length as a string, `0x` included.
pub const ADDRESS_STR_LEN: usize = ADDRESS_HEX_LEN + 2;

/// A 20-byte account identifier.
///
/// Equality is byte equality, so two strings differing only in letter case
/// parse to the same `Address`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    pub const ZERO: Address = Address([0u8; ADDRESS_LEN]);

    #[inline]
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Build an address from a 20-byte slice.
    pub fn from_slice(bytes: &[u8]) -> AddressResult<Self> {
        let arr: [u8; ADDRESS_LEN] = bytes.try_into().map_err(|_| {
            AddressError::MalformedHex(HexError::InvalidLength {
                expected: ADDRESS_LEN,
                actual: bytes.len(),
            })
        })?;
        Ok(Self(arr))
    }

    /// Take the trailing 20 bytes of a digest (`digest[12..32]`).
    #[inline]
    pub fn from_digest(digest: &[u8; DIGEST_LEN]) -> Self {
        let mut out = [0u8; ADDRESS_LEN];
        out.copy_from_slice(&digest[DIGEST_LEN - ADDRESS_LEN..]);
        Self(out)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    #[inline]
    pub const fn into_bytes(self) -> [u8; ADDRESS_LEN] {
        self.0
    }

    /// Lowercase 40 hex digits, no prefix, on the stack.
    pub fn to_lower_digits(&self) -> [u8; ADDRESS_HEX_LEN] {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";
        let mut out = [0u8; ADDRESS_HEX_LEN];
        for (i, byte) in self.0.iter().enumerate() {
            out[2 * i] = DIGITS[(byte >> 4) as usize];
            out[2 * i + 1] = DIGITS[(byte & 0x0f) as usize];
        }
        out
    }

    /// Raw (all lowercase) `0x`-prefixed form.
    #[inline]
    pub fn to_raw_string(&self) -> String {
        HexCodec::encode(&self.0)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    /// Parse `0x` + 40 hex digits (prefix optional, any case).
    fn from_str(s: &str) -> AddressResult<Self> {
        let body = HexCodec::strip_prefix(s);
        if body.len() != ADDRESS_HEX_LEN {
            return Err(AddressError::InvalidAddressLength(body.len()));
        }
        HexCodec::decode_digits_to_array(body).map(Self)
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_raw_string())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_raw_string())
    }
}
