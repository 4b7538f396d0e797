// address-core/src/chains/evm/deriver.rs
//
// Public Key -> Address derivation
//
// # Flow:  Public Key (65B 0x04.. | 64B | other) → H(key) (32B) → hash[12..32] (20B) → EIP-55

use super::address::Address;
use super::checksum::AddressChecksummer;
use crate::codec::HexCodec;
use crate::crypto::Digest256;
use crate::error::AddressResult;
use tracing::trace;
use zeroize::Zeroize;

/// Length of a SEC1 uncompressed point.
pub const UNCOMPRESSED_KEY_LEN: usize = 65;
/// Leading byte of a SEC1 uncompressed point.
pub const UNCOMPRESSED_KEY_MARKER: u8 = 0x04;

/// Drop the `0x04` marker from a 65-byte uncompressed key.
///
/// Every other shape (64-byte raw keys, compressed keys, arbitrary blobs)
/// is returned untouched and hashed as-is.
#[inline]
pub fn strip_uncompressed_marker(public_key: &[u8]) -> &[u8] {
    match public_key {
        [UNCOMPRESSED_KEY_MARKER, rest @ ..] if public_key.len() == UNCOMPRESSED_KEY_LEN => rest,
        _ => public_key,
    }
}

/// EVM Address Deriver
///
/// Pure and stateless; the only thing it carries is the hash adapter,
/// which is shared with its checksummer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressDeriver<D> {
    checksummer: AddressChecksummer<D>,
}

impl<D: Digest256> AddressDeriver<D> {
    pub const fn new(hasher: D) -> Self {
        Self {
            checksummer: AddressChecksummer::new(hasher),
        }
    }

    #[inline]
    pub fn checksummer(&self) -> &AddressChecksummer<D> {
        &self.checksummer
    }

    /// Derive the checksummed address of a hex-encoded public key.
    ///
    /// # Returns
    /// `"0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"`-shaped, always 42 chars.
    ///
    /// # Errors
    /// [`AddressError::MalformedHex`](crate::error::AddressError::MalformedHex)
    /// if `public_key_hex` does not decode.
    pub fn derive(&self, public_key_hex: &str) -> AddressResult<String> {
        let key = HexCodec::decode(public_key_hex)?;
        let address = self.derive_bytes(&key);
        Ok(self.checksummer.checksum_address(&address))
    }

    /// Derive the raw 20-byte address of an already-decoded public key.
    pub fn derive_bytes(&self, public_key: &[u8]) -> Address {
        let key = strip_uncompressed_marker(public_key);
        trace!(
            input_len = public_key.len(),
            hashed_len = key.len(),
            "hashing public key"
        );

        let mut hash = self.checksummer.hasher().digest256(key);
        let address = Address::from_digest(&hash);

        // Digest is key-derived material; wipe it before returning.
        hash.zeroize();

        address
    }

    /// Derive many keys; results keep the input order.
    #[cfg(not(feature = "parallel"))]
    pub fn derive_batch<K: AsRef<str>>(&self, public_keys: &[K]) -> Vec<AddressResult<String>> {
        public_keys.iter().map(|k| self.derive(k.as_ref())).collect()
    }

    /// Derive many keys in parallel; results keep the input order.
    #[cfg(feature = "parallel")]
    pub fn derive_batch<K: AsRef<str> + Sync>(
        &self,
        public_keys: &[K],
    ) -> Vec<AddressResult<String>> {
        use rayon::prelude::*;

        public_keys
            .par_iter()
            .map(|k| self.derive(k.as_ref()))
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
