// address-core/src/codec/mod.rs

//! Byte/text codecs shared by every address operation.

pub mod hex;

pub use self::hex::{HexCodec, HEX_PREFIX};
