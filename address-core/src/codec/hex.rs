// address-core/src/codec/hex.rs
//
// Hex Codec - bytes <-> `0x`-prefixed lowercase hex
//
// Encoding is fixed-width (2 digits per byte), so leading zero bytes of
// digests and addresses survive the round trip.

use crate::error::{AddressError, AddressResult, HexError};

/// `0x` prefix emitted by [`HexCodec::encode`].
pub const HEX_PREFIX: &str = "0x";

/// Bidirectional hex codec.
///
/// Decoding accepts an optional `0x`/`0X` prefix and either case;
/// encoding always produces the canonical form: `0x` + lowercase digits.
pub struct HexCodec;

impl HexCodec {
    /// Strip an optional `0x` / `0X` prefix, returning a view into `input`.
    #[inline]
    pub fn strip_prefix(input: &str) -> &str {
        input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
            .unwrap_or(input)
    }

    /// Decode a hex string into bytes, most-significant nibble first.
    ///
    /// # Errors
    /// [`AddressError::MalformedHex`] if the digit count is odd or a character
    /// falls outside `[0-9a-fA-F]`. Character positions are reported relative
    /// to the digits after the prefix.
    pub fn decode(input: &str) -> AddressResult<Vec<u8>> {
        let body = Self::strip_prefix(input);
        if body.len() % 2 != 0 {
            return Err(HexError::OddLength(body.len()).into());
        }
        hex::decode(body).map_err(|e| Self::map_hex_error(e, body, body.len() / 2))
    }

    /// Decode a hex string into exactly `N` bytes, without heap allocation.
    pub fn decode_to_array<const N: usize>(input: &str) -> AddressResult<[u8; N]> {
        Self::decode_digits_to_array(Self::strip_prefix(input))
    }

    /// Like [`decode_to_array`](Self::decode_to_array), but `digits` must
    /// already be prefix-free: a leading `0x` here is an invalid character.
    pub fn decode_digits_to_array<const N: usize>(digits: &str) -> AddressResult<[u8; N]> {
        if digits.len() % 2 != 0 {
            return Err(HexError::OddLength(digits.len()).into());
        }
        if digits.len() != N * 2 {
            return Err(HexError::InvalidLength {
                expected: N,
                actual: digits.len() / 2,
            }
            .into());
        }

        let mut out = [0u8; N];
        hex::decode_to_slice(digits, &mut out).map_err(|e| Self::map_hex_error(e, digits, N))?;
        Ok(out)
    }

    /// Encode bytes as `0x` + two lowercase digits per byte.
    pub fn encode(bytes: &[u8]) -> String {
        let mut out = String::with_capacity(HEX_PREFIX.len() + bytes.len() * 2);
        out.push_str(HEX_PREFIX);
        out.push_str(&hex::encode(bytes));
        out
    }

    /// `hex` reports the offending byte; recover the full character so
    /// non-ASCII input is named correctly. Every byte before `index` is an
    /// ASCII digit, so `index` is always a char boundary.
    fn map_hex_error(err: hex::FromHexError, digits: &str, expected: usize) -> AddressError {
        match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => HexError::InvalidCharacter {
                character: digits
                    .get(index..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(c),
                index,
            }
            .into(),
            hex::FromHexError::OddLength => HexError::OddLength(digits.len()).into(),
            hex::FromHexError::InvalidStringLength => HexError::InvalidLength {
                expected,
                actual: digits.len() / 2,
            }
            .into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_preserves_leading_zeros() {
        assert_eq!(HexCodec::encode(&[0x00, 0x00, 0x0a, 0xff]), "0x00000aff");
        assert_eq!(HexCodec::encode(&[0u8; 20]), format!("0x{}", "0".repeat(40)));
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(HexCodec::encode(&[]), "0x");
    }

    #[test]
    fn test_encode_is_lowercase() {
        let encoded = HexCodec::encode(&[0xAB, 0xCD, 0xEF]);
        assert_eq!(encoded, "0xabcdef");
    }

    #[test]
    fn test_decode_prefixes() {
        let expected = vec![0x48, 0x65, 0x6c, 0x6c, 0x6f];
        assert_eq!(HexCodec::decode("0x48656c6c6f").unwrap(), expected);
        assert_eq!(HexCodec::decode("0X48656C6C6F").unwrap(), expected);
        assert_eq!(HexCodec::decode("48656c6c6f").unwrap(), expected);
        assert_eq!(HexCodec::decode("0x").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_odd_length() {
        assert_eq!(
            HexCodec::decode("0xabc"),
            Err(AddressError::MalformedHex(HexError::OddLength(3)))
        );
    }

    #[test]
    fn test_decode_invalid_character() {
        assert_eq!(
            HexCodec::decode("0x12zz"),
            Err(AddressError::MalformedHex(HexError::InvalidCharacter {
                character: 'z',
                index: 2,
            }))
        );
        assert!(HexCodec::decode("0x 1").is_err());
        assert!(HexCodec::decode("0x0x12").is_err());
    }

    #[test]
    fn test_round_trip() {
        let samples: [&[u8]; 4] = [&[], &[0x00], &[0x00, 0x01, 0xfe, 0xff], &[0x5a; 65]];
        for bytes in samples {
            let encoded = HexCodec::encode(bytes);
            assert!(encoded.starts_with("0x"));
            assert_eq!(encoded.len() % 2, 0);
            assert_eq!(HexCodec::decode(&encoded).unwrap(), bytes);
        }
    }

    #[test]
    fn test_decode_to_array() {
        let arr: [u8; 4] = HexCodec::decode_to_array("0xDEADbeef").unwrap();
        assert_eq!(arr, [0xde, 0xad, 0xbe, 0xef]);

        let short: AddressResult<[u8; 4]> = HexCodec::decode_to_array("0xdead");
        assert_eq!(
            short,
            Err(AddressError::MalformedHex(HexError::InvalidLength {
                expected: 4,
                actual: 2,
            }))
        );

        let bad: AddressResult<[u8; 2]> = HexCodec::decode_to_array("0xg000");
        assert!(matches!(
            bad,
            Err(AddressError::MalformedHex(HexError::InvalidCharacter { character: 'g', .. }))
        ));
    }

    #[test]
    fn test_non_ascii_character_reported_whole() {
        assert_eq!(
            HexCodec::decode("0xéé"),
            Err(AddressError::MalformedHex(HexError::InvalidCharacter {
                character: 'é',
                index: 0,
            }))
        );
        let arr: AddressResult<[u8; 2]> = HexCodec::decode_to_array("0x1é0");
        assert!(matches!(
            arr,
            Err(AddressError::MalformedHex(HexError::InvalidCharacter { character: 'é', index: 1 }))
        ));
    }

    #[test]
    fn test_digits_are_not_stripped_twice() {
        let nested: AddressResult<[u8; 2]> = HexCodec::decode_digits_to_array("0x12");
        assert_eq!(
            nested,
            Err(AddressError::MalformedHex(HexError::InvalidCharacter {
                character: 'x',
                index: 1,
            }))
        );
        let ok: [u8; 2] = HexCodec::decode_digits_to_array("abCD").unwrap();
        assert_eq!(ok, [0xab, 0xcd]);
    }

    #[test]
    fn test_string_length_error_keeps_expected_width() {
        assert_eq!(
            HexCodec::map_hex_error(hex::FromHexError::InvalidStringLength, "abcd", 4),
            AddressError::MalformedHex(HexError::InvalidLength {
                expected: 4,
                actual: 2,
            })
        );
    }
}
