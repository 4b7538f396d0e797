// address-core/src/chains/evm/units.rs
//
// wei <-> ether conversion on 256-bit integers.
// 1 ether = 10^18 wei; amounts never pass through floating point.

use crate::error::{AddressError, AddressResult};
use alloy::primitives::{
    utils::{format_ether, parse_ether},
    U256,
};

/// Fractional digits of one ether (1 ether = 10^18 wei).
pub const ETHER_DECIMALS: usize = 18;

/// Decimal wei string -> decimal ether string (18 fractional digits).
///
/// `"1500000000000000000"` → `"1.500000000000000000"`
pub fn wei_to_ether(wei: &str) -> AddressResult<String> {
    let wei = wei.trim();
    if wei.is_empty() || !wei.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressError::InvalidAmount(format!(
            "'{}' is not a non-negative integer wei amount",
            wei
        )));
    }

    let value = U256::from_str_radix(wei, 10).map_err(|e| {
        AddressError::InvalidAmount(format!("'{}' does not fit in 256 bits: {}", wei, e))
    })?;

    Ok(format_ether(value))
}

/// Decimal ether string -> decimal wei string.
///
/// At most 18 fractional digits (more would need sub-wei precision);
/// negative amounts are rejected.
pub fn ether_to_wei(ether: &str) -> AddressResult<String> {
    let ether = ether.trim();
    if ether.is_empty() || ether.starts_with('-') {
        return Err(AddressError::InvalidAmount(format!(
            "'{}' is not a non-negative ether amount",
            ether
        )));
    }

    if let Some((_, fraction)) = ether.split_once('.') {
        if fraction.len() > ETHER_DECIMALS {
            return Err(AddressError::InvalidAmount(format!(
                "'{}' has more than {} fractional digits",
                ether, ETHER_DECIMALS
            )));
        }
    }

    let value = parse_ether(ether)
        .map_err(|e| AddressError::InvalidAmount(format!("'{}': {}", ether, e)))?;

    Ok(value.to_string())
}
