use proptest::prelude::*;
use serde_json::{Map, Value};
use texttools::{base64, json};

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<String>().prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..6).prop_map(|entries| {
                let mut map = Map::new();
                for (key, value) in entries {
                    map.insert(key, value);
                }
                Value::Object(map)
            }),
        ]
    })
}

/// Flip the lowest bit of the last data symbol, which is always a padding bit
/// when the input length is not a multiple of three.
fn with_stray_padding_bit(encoded: &str) -> String {
    let mut bytes = encoded.as_bytes().to_vec();
    let last = encoded.trim_end_matches('=').len() - 1;
    let index = ALPHABET
        .iter()
        .position(|&c| c == bytes[last])
        .expect("standard alphabet symbol");
    bytes[last] = ALPHABET[index | 1];
    String::from_utf8(bytes).expect("ascii")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_base64_round_trip(s in any::<String>()) {
        let encoded = base64::encode(&s);
        let encoded = encoded.value().unwrap();
        let decoded = base64::decode(encoded);
        prop_assert_eq!(decoded.value(), Some(s.as_str()));
        prop_assert_eq!(decoded.error(), None);
    }

    #[test]
    fn prop_encoded_length_is_padded(s in any::<String>()) {
        let encoded = base64::encode(&s);
        let encoded = encoded.value().unwrap();
        prop_assert_eq!(encoded.len() % 4, 0);
        prop_assert_eq!(encoded.len(), s.len().div_ceil(3) * 4);
    }

    #[test]
    fn prop_stray_padding_bits_fail_verification(s in ".{1,40}") {
        prop_assume!(s.len() % 3 != 0);
        let encoded = base64::encode(&s);
        let tampered = with_stray_padding_bit(encoded.value().unwrap());
        prop_assert_ne!(&tampered, encoded.value().unwrap());

        let result = base64::decode(&tampered);
        prop_assert_eq!(result.value(), None);
        prop_assert_eq!(result.error(), Some("Invalid Base64 format: failed verification"));
    }

    #[test]
    fn prop_pretty_printing_is_idempotent(value in json_value()) {
        let compact = serde_json::to_string(&value).unwrap();
        let first = json::validate(&compact);
        let pretty = first.pretty_text().unwrap();

        let second = json::validate(pretty);
        prop_assert_eq!(second.pretty_text(), Some(pretty));
    }

    #[test]
    fn prop_pretty_printing_preserves_value(value in json_value()) {
        let compact = serde_json::to_string(&value).unwrap();
        let pretty = json::validate(&compact);
        let reparsed: Value = serde_json::from_str(pretty.pretty_text().unwrap()).unwrap();
        prop_assert_eq!(reparsed, value);
    }

    #[test]
    fn prop_operations_are_deterministic(s in any::<String>()) {
        prop_assert_eq!(json::validate(&s), json::validate(&s));
        prop_assert_eq!(base64::encode(&s), base64::encode(&s));
        prop_assert_eq!(base64::decode(&s), base64::decode(&s));
    }
}
