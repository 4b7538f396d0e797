// address-core/src/chains/evm/checksum.rs
//
// EIP-55 Mixed-case Checksum
//
// 1. lowercase the 40 address digits (no prefix)
// 2. digest = H(ascii bytes of those digits)   <- the TEXT, not the 20 raw bytes
// 3. digit i is a letter and nibble i of digest >= 8  =>  uppercase it
// 4. prepend "0x"

use super::address::{Address, ADDRESS_HEX_LEN, ADDRESS_STR_LEN};
use crate::codec::{HexCodec, HEX_PREFIX};
use crate::crypto::{Digest256, DIGEST_LEN};
use crate::error::{AddressError, AddressResult, HexError};

/// Applies the mixed-case checksum using the digest it was built with.
///
/// Stateless apart from the (zero-sized) hash adapter, so it is `Copy` and
/// safe to share across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressChecksummer<D> {
    hasher: D,
}

impl<D: Digest256> AddressChecksummer<D> {
    pub const fn new(hasher: D) -> Self {
        Self { hasher }
    }

    #[inline]
    pub fn hasher(&self) -> &D {
        &self.hasher
    }

    /// Checksum an address string (prefix optional, any case).
    ///
    /// # Errors
    /// - [`AddressError::InvalidAddressLength`] if the body is not 40 bytes long.
    ///   Length is checked first.
    /// - [`AddressError::MalformedHex`] if the body has the right length but
    ///   contains a non-hex character. This is reported as a hex error, not as
    ///   `InvalidAddressLength`, so callers can tell a typo from a truncation.
    pub fn checksum(&self, address: &str) -> AddressResult<String> {
        let body = HexCodec::strip_prefix(address);
        if body.len() != ADDRESS_HEX_LEN {
            return Err(AddressError::InvalidAddressLength(body.len()));
        }

        let mut lower = [0u8; ADDRESS_HEX_LEN];
        for (index, c) in body.char_indices() {
            if !c.is_ascii_hexdigit() {
                return Err(HexError::InvalidCharacter {
                    character: c,
                    index,
                }
                .into());
            }
            // ASCII so far, so `index` < 40.
            lower[index] = c.to_ascii_lowercase() as u8;
        }

        Ok(self.apply(&lower))
    }

    /// Checksum an already-parsed address. Infallible.
    #[inline]
    pub fn checksum_address(&self, address: &Address) -> String {
        self.apply(&address.to_lower_digits())
    }

    /// `true` iff `address` is exactly its own checksummed form.
    pub fn verify(&self, address: &str) -> bool {
        match self.checksum(address) {
            Ok(expected) => expected == address,
            Err(_) => false,
        }
    }

    fn apply(&self, lower: &[u8; ADDRESS_HEX_LEN]) -> String {
        let digest = self.hasher.digest256(lower);

        let mut out = String::with_capacity(ADDRESS_STR_LEN);
        out.push_str(HEX_PREFIX);
        for (i, &c) in lower.iter().enumerate() {
            if c.is_ascii_alphabetic() && nibble_at(&digest, i) >= 8 {
                out.push(c.to_ascii_uppercase() as char);
            } else {
                out.push(c as char);
            }
        }
        out
    }
}

/// Hex digit `i` of the digest's hex rendering, read straight from the bytes.
#[inline]
fn nibble_at(digest: &[u8; DIGEST_LEN], i: usize) -> u8 {
    let byte = digest[i / 2];
    if i % 2 == 0 {
        byte >> 4
    } else {
        byte & 0x0f
    }
}

// =============================================================================
// TESTS
// =============================================================================
