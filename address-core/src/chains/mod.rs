// src/chains/mod.rs
pub mod evm;

use crate::crypto::HashVariant;
use crate::error::{AddressError, AddressResult};
use evm::{AddressChecksummer, AddressDeriver};
use serde::{Deserialize, Serialize};

// Cấu hình chung cho các EVM chain: chỉ định rõ hàm băm dùng cho checksum.
// `hash` là bắt buộc, không có giá trị mặc định ngầm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EvmConfig {
    pub hash: HashVariant,
}

impl EvmConfig {
    pub const fn new(hash: HashVariant) -> Self {
        Self { hash }
    }

    // Ethereum và mọi EVM chain tuân theo EIP-55 (Keccak-256)
    pub const fn ethereum() -> Self {
        Self::new(HashVariant::Keccak256)
    }

    pub fn from_json(json: &str) -> AddressResult<Self> {
        serde_json::from_str(json).map_err(|e| AddressError::Config(e.to_string()))
    }

    pub fn to_json(&self) -> AddressResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| AddressError::Config(e.to_string()))
    }

    pub fn checksummer(&self) -> AddressChecksummer<HashVariant> {
        AddressChecksummer::new(self.hash)
    }

    pub fn deriver(&self) -> AddressDeriver<HashVariant> {
        AddressDeriver::new(self.hash)
    }
}
