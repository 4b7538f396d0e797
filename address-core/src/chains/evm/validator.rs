// address-core/src/chains/evm/validator.rs
//
// Address string validation. Never fails: malformed input is just `false`.

use super::address::ADDRESS_STR_LEN;
use super::checksum::AddressChecksummer;
use crate::crypto::Digest256;
use tracing::debug;

pub struct AddressValidator;

impl AddressValidator {
    /// `0x` + exactly 40 hex digits, any letter case.
    ///
    /// Does not look at checksum casing; see [`is_valid_checksum`](Self::is_valid_checksum).
    #[inline]
    pub fn is_valid_format(address: &str) -> bool {
        address.len() == ADDRESS_STR_LEN
            && address.starts_with("0x")
            && address.as_bytes()[2..].iter().all(u8::is_ascii_hexdigit)
    }

    /// Format-valid AND the letter casing is exactly the checksummed form.
    ///
    /// A mismatch usually means a mistyped address.
    pub fn is_valid_checksum<D: Digest256>(address: &str, hasher: D) -> bool {
        if !Self::is_valid_format(address) {
            return false;
        }
        let valid = AddressChecksummer::new(hasher).verify(address);
        if !valid {
            debug!(%address, "checksum casing mismatch");
        }
        valid
    }

    /// Case-insensitive comparison of two format-valid addresses.
    #[inline]
    pub fn equals(addr1: &str, addr2: &str) -> bool {
        Self::is_valid_format(addr1)
            && Self::is_valid_format(addr2)
            && addr1[2..].eq_ignore_ascii_case(&addr2[2..])
    }
}
