// address-core/src/chains/evm/mod.rs

//! Ethereum Virtual Machine (EVM) Account Addresses
//!
//! Everything here is pure and synchronous; components are `Copy` and may be
//! shared freely across threads.
//!
//! # Key Features
//! - **Derivation**: public key → EIP-55 checksummed address via [`AddressDeriver`].
//! - **Checksumming**: mixed-case encoding of a 20-byte address via [`AddressChecksummer`].
//! - **Validation**: format and checksum-casing checks via [`AddressValidator`].
//! - **Units**: exact wei ↔ ether conversion in [`units`].
//! - **Parallelism**: Optional `rayon` support for batch derivation (see `parallel` feature).

pub mod address;
pub mod checksum;
pub mod deriver;
pub mod units;
pub mod validator;

// Re-exports for cleaner API access
pub use address::{Address, ADDRESS_HEX_LEN, ADDRESS_LEN, ADDRESS_STR_LEN};
pub use checksum::AddressChecksummer;
pub use deriver::{strip_uncompressed_marker, AddressDeriver};
pub use validator::AddressValidator;
