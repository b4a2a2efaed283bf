//! Wire format integration tests
//!
//! Round-trip and canonical-form properties of every wire type, exercised
//! through the public API and through serde_json the way the gateway uses
//! them.

mod common;

use apiwire_core::{
    from_json_value, to_json_value, Address, Big, Bytes, Error, Hash, HexCodec, HexError, Uint,
    Uint32, Uint64,
};
use common::{is_canonical_data, is_canonical_quantity, random_bytes, rng};
use num_bigint::BigUint;
use rand::Rng;
use serde_json::json;

const ITERATIONS: usize = 500;

#[test]
fn test_uint64_round_trip() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        // Spread values over every digit count, not just the top of the range
        let shift = rng.gen_range(0..64);
        let value = rng.gen::<u64>() >> shift;

        let encoded = Uint64(value).to_hex();
        assert!(is_canonical_quantity(&encoded), "{}", encoded);
        assert_eq!(Uint64::from_hex(&encoded), Ok(Uint64(value)));
    }
}

#[test]
fn test_big_round_trip() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let bytes = random_bytes(&mut rng, 32);
        let value = Big::from(BigUint::from_bytes_be(&bytes));

        let encoded = value.to_hex();
        assert!(is_canonical_quantity(&encoded), "{}", encoded);
        assert_eq!(Big::from_hex(&encoded), Ok(value));
    }
}

#[test]
fn test_uint32_round_trip() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let value = Uint32::from(rng.gen::<u32>());
        let encoded = value.to_hex();
        assert!(is_canonical_quantity(&encoded), "{}", encoded);
        assert_eq!(encoded.parse::<Uint32>(), Ok(value));
    }
}

#[test]
fn test_bytes_round_trip() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let payload = Bytes(random_bytes(&mut rng, 64));

        let encoded = payload.to_hex();
        assert!(is_canonical_data(&encoded), "{}", encoded);
        assert_eq!(encoded.len(), 2 + 2 * payload.len());
        assert_eq!(Bytes::from_hex(&encoded), Ok(payload));
    }
}

#[test]
fn test_hash_round_trip() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let hash = Hash::new(rng.gen());

        let encoded = hash.to_hex();
        assert_eq!(encoded.len(), 66);
        assert!(is_canonical_data(&encoded));
        assert_eq!(Hash::from_hex(&encoded), Ok(hash));
    }
}

#[test]
fn test_address_round_trip() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let address = Address::new(rng.gen());

        let encoded = address.to_hex();
        assert_eq!(encoded.len(), 42);
        assert_eq!(Address::from_hex(&encoded), Ok(address));
    }
}

#[test]
fn test_canonical_strings_are_fixed_points() {
    for input in ["0x0", "0x1", "0x1b4", "0xffffffffffffffff"] {
        assert_eq!(Uint64::from_hex(input).unwrap().to_hex(), input);
        assert_eq!(Big::from_hex(input).unwrap().to_hex(), input);
    }
    for input in ["0x", "0x00", "0x0000ff", "0xdeadbeef"] {
        assert_eq!(Bytes::from_hex(input).unwrap().to_hex(), input);
    }
}

#[test]
fn test_uppercase_input_normalizes() {
    assert_eq!(Uint64::from_hex("0X2F2").unwrap().to_hex(), "0x2f2");
    assert_eq!(Bytes::from_hex("0XDEADBEEF").unwrap().to_hex(), "0xdeadbeef");
    assert_eq!(Big::from_hex("0xABC").unwrap().to_hex(), "0xabc");
}

#[test]
fn test_quantity_and_data_zero_differ() {
    assert_eq!(Uint64(0).to_hex(), "0x0");
    assert_eq!(Big::zero().to_hex(), "0x0");
    assert_eq!(Bytes::default().to_hex(), "0x");
    assert_eq!(Bytes(vec![0]).to_hex(), "0x00");
}

#[test]
fn test_empty_string_handling() {
    assert_eq!(Uint64::from_hex(""), Ok(Uint64(0)));
    assert_eq!(Big::from_hex(""), Ok(Big::zero()));
    assert_eq!(Uint32::from_hex(""), Ok(Uint32::default()));
    assert_eq!(Bytes::from_hex(""), Ok(Bytes::default()));
    assert_eq!(HexCodec::STANDARD.decode(""), Err(HexError::EmptyData));
    assert_eq!(Hash::from_hex(""), Err(HexError::EmptyData));
}

#[test]
fn test_big_width_limit() {
    let max = format!("0x{}", "f".repeat(64));
    let too_wide = format!("0x1{}", "0".repeat(64));

    assert!(Big::from_hex(&max).is_ok());
    assert_eq!(Big::from_hex(&too_wide), Err(HexError::Big256Range));

    // Encoding is unbounded
    let wide = Big::from(BigUint::from(1u32) << 300u32);
    assert_eq!(wide.to_hex().len(), 2 + 76);
}

#[test]
fn test_width_configured_uint() {
    let input = "0xffffffffffffffff";
    assert_eq!(Uint::<64>::from_hex(input).map(Uint::get), Ok(u64::MAX));
    assert_eq!(
        Uint::<32>::from_hex(input),
        Err(HexError::UintRange { bits: 32 })
    );
    assert_eq!(Uint::<32>::from_hex("0xffffffff").map(Uint::get), Ok(0xffff_ffff));
    assert_eq!(
        Uint::<32>::from_hex("0x100000000"),
        Err(HexError::UintRange { bits: 32 })
    );
}

#[test]
fn test_serde_inside_documents() {
    let doc = json!({
        "nonce": Uint64(7),
        "value": Big::from(1_000_000u64),
        "hash": Hash::ZERO,
        "input": Bytes(vec![0x60, 0x80]),
    });

    assert_eq!(doc["nonce"], "0x7");
    assert_eq!(doc["value"], "0xf4240");
    assert_eq!(doc["input"], "0x6080");
    assert_eq!(doc["hash"].as_str().unwrap().len(), 66);
}

#[test]
fn test_non_string_json_rejected() {
    for value in [json!(7), json!(null), json!(true), json!(["0x1"]), json!({"v": "0x1"})] {
        let err = from_json_value::<Uint64>(&value).unwrap_err();
        assert!(matches!(err, Error::NonString { .. }), "{:?}", value);
        assert!(serde_json::from_value::<Big>(value).is_err());
    }
}

#[test]
fn test_json_value_helpers_round_trip() {
    let hash = Hash::from_bytes(&[0xca, 0xfe]);
    let value = to_json_value(&hash);
    assert_eq!(from_json_value::<Hash>(&value), Ok(hash));
}

#[test]
fn test_address_and_hash_set_bytes() {
    let mut address = Address::ZERO;
    address.set_bytes(&[0xaa; 24]);
    assert_eq!(address, Address::new([0xaa; 20]));

    let literal = Address::from_trusted_literal("0x00000000000000000000000000000000000000ff");
    assert_eq!(literal.as_bytes()[19], 0xff);
}
