#![cfg(feature = "serde")]

//! Integration tests for serde support in curry-engine.
//!
//! These tests verify that signatures can be described in configuration and
//! that invalid signatures are rejected while deserializing.

use curry_engine::engine::{Parameter, Signature, curry_signature};
use rstest::rstest;

#[rstest]
fn test_signature_json_roundtrip() {
    let signature = Signature::variadic(2);
    let json = serde_json::to_string(&signature).unwrap();
    assert_eq!(json, r#"["required","required","rest"]"#);

    let restored: Signature = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, signature);
    assert_eq!(restored.arity(), 2);
}

#[rstest]
#[case(r#"["required","optional"]"#, 1)]
#[case(r#"["rest"]"#, 0)]
#[case("[]", 0)]
fn test_signature_from_configuration(#[case] json: &str, #[case] arity: usize) {
    let signature: Signature = serde_json::from_str(json).unwrap();
    assert_eq!(signature.arity(), arity);
}

#[rstest]
#[case(r#"["rest","required"]"#, "rest parameter at position 0")]
#[case(r#"["rest","rest"]"#, "at most one rest parameter")]
fn test_invalid_signature_is_rejected(#[case] json: &str, #[case] fragment: &str) {
    let error = serde_json::from_str::<Signature>(json).unwrap_err();
    assert!(error.to_string().contains(fragment), "{error}");
}

#[rstest]
fn test_parameter_json_roundtrip() {
    let json = serde_json::to_string(&Parameter::Optional).unwrap();
    assert_eq!(json, r#""optional""#);
    assert_eq!(serde_json::from_str::<Parameter>(&json).unwrap(), Parameter::Optional);
}

#[rstest]
fn test_configured_signature_drives_curry() {
    let signature: Signature = serde_json::from_str(r#"["required","required"]"#).unwrap();
    let add = curry_signature(&signature, |arguments: Vec<i32>| arguments[0] + arguments[1]);
    let pending = add.apply([40]).partial().unwrap();
    assert_eq!(pending.apply([2]).complete(), Some(42));
}
