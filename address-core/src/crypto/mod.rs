// address-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! The crate never implements a hash function itself. It consumes one through
//! [`Digest256`]; the concrete primitive is always chosen explicitly:
//!
//! - [`Keccak256`]: the digest EIP-55 checksums and EVM addresses are defined over.
//! - [`Sha3_256`]: FIPS-202 SHA3-256. Not bit-compatible with Keccak-256.
//! - [`HashVariant`]: runtime selection of either (config files, CLI).

pub mod digest;

// Re-exports for cleaner API access
pub use digest::{digest_hex, Digest256, HashVariant, Keccak256, Sha3_256, DIGEST_LEN};
