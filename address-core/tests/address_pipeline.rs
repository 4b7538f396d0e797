// End-to-end: public key -> checksummed address -> validation, through the public API only.

use evm_address::{
    Address, AddressChecksummer, AddressDeriver, AddressValidator, EvmConfig, HashVariant,
    HexCodec, Keccak256, ADDRESS_STR_LEN,
};
use k256::{elliptic_curve::sec1::ToEncodedPoint, SecretKey};
use std::thread;

// Anvil/Hardhat accounts #0 and #1
const ACCOUNTS: [(&str, &str); 2] = [
    (
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
    ),
    (
        "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
        "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
    ),
];

fn uncompressed_public_key(priv_hex: &str) -> String {
    let secret = SecretKey::from_slice(&hex::decode(priv_hex).unwrap()).unwrap();
    HexCodec::encode(secret.public_key().to_encoded_point(false).as_bytes())
}

#[test]
fn derive_then_validate() {
    let deriver = EvmConfig::ethereum().deriver();
    for (priv_key, expected) in ACCOUNTS {
        let address = deriver.derive(&uncompressed_public_key(priv_key)).unwrap();
        assert_eq!(address, expected);
        assert_eq!(address.len(), ADDRESS_STR_LEN);
        assert!(AddressValidator::is_valid_format(&address));
        assert!(AddressValidator::is_valid_checksum(&address, HashVariant::Keccak256));
    }
}

#[test]
fn raw_and_checksummed_denote_same_address() {
    let checksummer = AddressChecksummer::new(Keccak256);
    for (_, expected) in ACCOUNTS {
        let raw = expected.to_lowercase();
        let a: Address = raw.parse().unwrap();
        let b: Address = expected.parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(checksummer.checksum_address(&a), expected);
        assert_eq!(checksummer.checksum(&raw).unwrap().to_lowercase(), raw);
    }
}

#[test]
fn concurrent_calls_agree() {
    let deriver = AddressDeriver::new(Keccak256);
    let key = uncompressed_public_key(ACCOUNTS[0].0);
    let expected = deriver.derive(&key).unwrap();

    thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| deriver.derive(&key).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn batch_matches_single() {
    let deriver = AddressDeriver::new(HashVariant::Keccak256);
    let keys: Vec<String> = ACCOUNTS
        .iter()
        .map(|(priv_key, _)| uncompressed_public_key(priv_key))
        .collect();
    let batch = deriver.derive_batch(&keys);
    for ((result, key), (_, expected)) in batch.iter().zip(&keys).zip(ACCOUNTS) {
        assert_eq!(result.as_deref(), Ok(expected));
        assert_eq!(deriver.derive(key).unwrap(), expected);
    }
}
