//! Property-based tests for the repr renderer.
//!
//! These verify, over generated inputs:
//! 1. Decoration policies never affect non-string kinds.
//! 2. The prefix each policy promises for each string-like kind.
//! 3. Container output composes from per-element output under the same
//!    policy.
//! 4. Unlimited configurations never emit an elision marker.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretext_repr::{brepr, prepr, urepr};
use pretext_value::{canon, Value};
use proptest::prelude::*;

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::None),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::int),
        any::<f64>().prop_map(Value::float),
        (any::<f64>(), any::<f64>()).prop_map(|(re, im)| Value::complex(re, im)),
    ]
}

fn string_like_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..64).prop_map(Value::bytes),
        ".{0,48}".prop_map(Value::string),
    ]
}

proptest! {
    #[test]
    fn policies_do_not_affect_scalars(value in scalar_strategy()) {
        let canonical = canon::repr(&value);
        prop_assert_eq!(prepr(&value).unwrap(), canonical.clone());
        prop_assert_eq!(brepr(&value).unwrap(), canonical.clone());
        prop_assert_eq!(urepr(&value).unwrap(), canonical);
    }

    #[test]
    fn byte_sequences_get_the_promised_prefix(data in prop::collection::vec(any::<u8>(), 0..128)) {
        let quoted = canon::quote_bytes(&data);
        let value = Value::bytes(data);
        prop_assert_eq!(prepr(&value).unwrap(), format!("b{quoted}"));
        prop_assert_eq!(brepr(&value).unwrap(), format!("b{quoted}"));
        prop_assert_eq!(urepr(&value).unwrap(), quoted);
    }

    #[test]
    fn character_sequences_get_the_promised_prefix(text in ".{0,96}") {
        let quoted = canon::quote_str(&text);
        let value = Value::string(text);
        prop_assert_eq!(prepr(&value).unwrap(), format!("u{quoted}"));
        prop_assert_eq!(urepr(&value).unwrap(), format!("u{quoted}"));
        prop_assert_eq!(brepr(&value).unwrap(), quoted);
    }

    #[test]
    fn list_output_composes_from_element_output(
        items in prop::collection::vec(string_like_strategy(), 0..12)
    ) {
        let expected = |render: fn(&Value) -> pretext_repr::ReprResult<String>| {
            let parts: Vec<String> = items.iter().map(|v| render(v).unwrap()).collect();
            format!("[{}]", parts.join(", "))
        };
        let list = Value::list(items.clone());
        prop_assert_eq!(prepr(&list).unwrap(), expected(prepr));
        prop_assert_eq!(brepr(&list).unwrap(), expected(brepr));
        prop_assert_eq!(urepr(&list).unwrap(), expected(urepr));
    }

    #[test]
    fn dict_output_composes_from_entry_output(
        entries in prop::collection::vec(
            (string_like_strategy(), string_like_strategy()),
            0..8,
        )
    ) {
        let parts: Vec<String> = entries
            .iter()
            .map(|(k, v)| format!("{}: {}", brepr(k).unwrap(), brepr(v).unwrap()))
            .collect();
        let expected = format!("{{{}}}", parts.join(", "));
        prop_assert_eq!(brepr(&Value::dict(entries.clone())).unwrap(), expected);
    }

    #[test]
    fn unlimited_rendering_never_elides(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let rendered = brepr(&Value::bytes(data.clone())).unwrap();
        // Every input byte contributes at least one output character past
        // the prefix and quotes.
        prop_assert!(rendered.len() >= data.len() + 3);
    }
}
