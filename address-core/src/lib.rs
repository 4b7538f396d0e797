//! EIP-55 checksummed account addresses.
//!
//! ```text
//! public key ─▶ Digest256 ─▶ HexCodec ─▶ AddressChecksummer ─▶ "0x5aAeb6…"
//!                                         AddressValidator ◀── any string
//! ```
//!
//! All operations are pure functions over their inputs: no I/O, no shared
//! state, safe to call concurrently from any thread.

pub mod chains;
pub mod codec;
pub mod crypto;
pub mod error;

pub use chains::evm::{
    Address, AddressChecksummer, AddressDeriver, AddressValidator, ADDRESS_LEN, ADDRESS_STR_LEN,
};
pub use chains::EvmConfig;
pub use codec::HexCodec;
pub use crypto::{Digest256, HashVariant, Keccak256, Sha3_256};
pub use error::{AddressError, AddressResult, HexError};
