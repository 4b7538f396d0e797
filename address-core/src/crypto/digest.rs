// address-core/src/crypto/digest.rs
//
// Digest Adapter - the single seam to the 256-bit hash primitive
//
// Checksumming and derivation only ever need `bytes -> [u8; 32]`.
// The concrete primitive is chosen explicitly by the caller: EIP-55 is
// defined over Keccak-256, which is NOT bit-compatible with FIPS SHA3-256.

use crate::codec::HexCodec;
use crate::error::{AddressError, AddressResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tiny_keccak::{Hasher, Keccak, Sha3};

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 32;

/// A 256-bit hash primitive.
///
/// Implementations must be pure: the same input always yields the same
/// 32 bytes, with no side effects.
pub trait Digest256: Send + Sync {
    fn digest256(&self, bytes: &[u8]) -> [u8; DIGEST_LEN];
}

/// Keccak-256 (original Keccak padding), as used by Ethereum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Keccak256;

impl Digest256 for Keccak256 {
    #[inline]
    fn digest256(&self, bytes: &[u8]) -> [u8; DIGEST_LEN] {
        let mut hasher = Keccak::v256();
        let mut out = [0u8; DIGEST_LEN];
        hasher.update(bytes);
        hasher.finalize(&mut out);
        out
    }
}

/// FIPS-202 SHA3-256.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sha3_256;

impl Digest256 for Sha3_256 {
    #[inline]
    fn digest256(&self, bytes: &[u8]) -> [u8; DIGEST_LEN] {
        let mut hasher = Sha3::v256();
        let mut out = [0u8; DIGEST_LEN];
        hasher.update(bytes);
        hasher.finalize(&mut out);
        out
    }
}

/// Runtime-selected hash primitive (config files, CLI flags).
///
/// There is intentionally no `Default`: the variant must be named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashVariant {
    #[serde(rename = "keccak256")]
    Keccak256,
    #[serde(rename = "sha3-256")]
    Sha3_256,
}

impl HashVariant {
    pub const fn name(self) -> &'static str {
        match self {
            HashVariant::Keccak256 => "keccak256",
            HashVariant::Sha3_256 => "sha3-256",
        }
    }
}

impl Digest256 for HashVariant {
    #[inline]
    fn digest256(&self, bytes: &[u8]) -> [u8; DIGEST_LEN] {
        match self {
            HashVariant::Keccak256 => Keccak256.digest256(bytes),
            HashVariant::Sha3_256 => Sha3_256.digest256(bytes),
        }
    }
}

impl fmt::Display for HashVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashVariant {
    type Err = AddressError;

    fn from_str(s: &str) -> AddressResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "keccak256" | "keccak-256" => Ok(HashVariant::Keccak256),
            "sha3-256" | "sha3_256" | "sha3" => Ok(HashVariant::Sha3_256),
            other => Err(AddressError::Config(format!(
                "unknown hash variant '{}' (expected keccak256 or sha3-256)",
                other
            ))),
        }
    }
}

/// Digest rendered as `0x`-prefixed lowercase hex.
pub fn digest_hex<D: Digest256 + ?Sized>(hasher: &D, bytes: &[u8]) -> String {
    HexCodec::encode(&hasher.digest256(bytes))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known empty-input digests.
    const KECCAK_EMPTY: &str = "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470";
    const SHA3_EMPTY: &str = "0xa7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a";

    #[test]
    fn test_keccak_empty() {
        assert_eq!(digest_hex(&Keccak256, b""), KECCAK_EMPTY);
    }

    #[test]
    fn test_sha3_empty() {
        assert_eq!(digest_hex(&Sha3_256, b""), SHA3_EMPTY);
    }

    #[test]
    fn test_variants_are_not_interchangeable() {
        let msg = b"Hello, Ethereum!";
        assert_ne!(Keccak256.digest256(msg), Sha3_256.digest256(msg));
    }

    #[test]
    fn test_variant_dispatch() {
        let msg = b"dispatch";
        assert_eq!(HashVariant::Keccak256.digest256(msg), Keccak256.digest256(msg));
        assert_eq!(HashVariant::Sha3_256.digest256(msg), Sha3_256.digest256(msg));
    }

    #[test]
    fn test_deterministic() {
        let msg = b"same input";
        assert_eq!(Keccak256.digest256(msg), Keccak256.digest256(msg));
    }

    #[test]
    fn test_parse_variant() {
        assert_eq!("keccak256".parse::<HashVariant>().unwrap(), HashVariant::Keccak256);
        assert_eq!("KECCAK-256".parse::<HashVariant>().unwrap(), HashVariant::Keccak256);
        assert_eq!("sha3-256".parse::<HashVariant>().unwrap(), HashVariant::Sha3_256);
        assert!(matches!(
            "sha256".parse::<HashVariant>(),
            Err(AddressError::Config(_))
        ));
    }

    #[test]
    fn test_display_round_trip() {
        for variant in [HashVariant::Keccak256, HashVariant::Sha3_256] {
            assert_eq!(variant.to_string().parse::<HashVariant>().unwrap(), variant);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&HashVariant::Sha3_256).unwrap();
        assert_eq!(json, "\"sha3-256\"");
        let parsed: HashVariant = serde_json::from_str("\"keccak256\"").unwrap();
        assert_eq!(parsed, HashVariant::Keccak256);
    }
}
