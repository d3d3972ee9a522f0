//! Tests for Symbol.for / Symbol.keyFor

use super::{call_symbol, create_test_realm, key_for, symbol_for, symbol_static};
use symrealm::{JsError, JsValue, Realm};

#[test]
fn test_symbol_for_same_key() -> Result<(), JsError> {
    let realm = create_test_realm();
    let a = symbol_for(&realm, &[JsValue::from("app")])?;
    let b = symbol_for(&realm, &[JsValue::from("app")])?;
    assert!(a.strict_equals(&b));
    assert_eq!(a.to_js_string(), "Symbol(app)");
    Ok(())
}

#[test]
fn test_symbol_for_different_keys() -> Result<(), JsError> {
    let realm = create_test_realm();
    let a = symbol_for(&realm, &[JsValue::from("a")])?;
    let b = symbol_for(&realm, &[JsValue::from("b")])?;
    assert!(!a.strict_equals(&b));
    Ok(())
}

#[test]
fn test_symbol_for_differs_from_symbol_call() -> Result<(), JsError> {
    let realm = create_test_realm();
    let registered = symbol_for(&realm, &[JsValue::from("x")])?;
    let fresh = call_symbol(&realm, &[JsValue::from("x")])?;
    assert!(!registered.strict_equals(&fresh));
    Ok(())
}

#[test]
fn test_symbol_for_coerces_key() -> Result<(), JsError> {
    let realm = create_test_realm();
    let from_number = symbol_for(&realm, &[JsValue::from(42)])?;
    let from_string = symbol_for(&realm, &[JsValue::from("42")])?;
    assert!(from_number.strict_equals(&from_string));
    Ok(())
}

#[test]
fn test_symbol_for_missing_argument() -> Result<(), JsError> {
    let realm = create_test_realm();
    let missing = symbol_for(&realm, &[])?;
    let explicit = symbol_for(&realm, &[JsValue::from("undefined")])?;
    assert!(missing.strict_equals(&explicit));
    assert_eq!(key_for(&realm, missing)?, JsValue::from("undefined"));
    Ok(())
}

#[test]
fn test_symbol_for_empty_string_key() -> Result<(), JsError> {
    let realm = create_test_realm();
    let sym = symbol_for(&realm, &[JsValue::from("")])?;
    assert_eq!(key_for(&realm, sym)?, JsValue::from(""));
    Ok(())
}

#[test]
fn test_key_for_round_trip() -> Result<(), JsError> {
    let realm = create_test_realm();
    let sym = symbol_for(&realm, &[JsValue::from("shared")])?;
    assert_eq!(key_for(&realm, sym)?, JsValue::from("shared"));
    Ok(())
}

#[test]
fn test_key_for_unregistered_symbol() -> Result<(), JsError> {
    let realm = create_test_realm();
    let sym = call_symbol(&realm, &[JsValue::from("local")])?;
    assert_eq!(key_for(&realm, sym)?, JsValue::Undefined);
    Ok(())
}

#[test]
fn test_key_for_well_known_symbol() -> Result<(), JsError> {
    let realm = create_test_realm();
    let iterator = symbol_static(&realm, "iterator")?;
    assert_eq!(key_for(&realm, iterator)?, JsValue::Undefined);
    Ok(())
}

#[test]
fn test_key_for_non_symbol_throws() {
    let realm = create_test_realm();
    for value in [
        JsValue::from("str"),
        JsValue::from(1),
        JsValue::Undefined,
        JsValue::Null,
        JsValue::Object(realm.object_prototype().clone()),
    ] {
        assert_eq!(key_for(&realm, value), Err(JsError::NotASymbol));
    }
}

#[test]
fn test_key_for_without_argument_throws() {
    let realm = create_test_realm();
    let result = super::call_method(&realm, &super::symbol_ctor(&realm), "keyFor", &[]);
    assert!(matches!(result, Err(JsError::NotASymbol)));
}

#[test]
fn test_registries_are_per_realm() -> Result<(), JsError> {
    let first = create_test_realm();
    let second = create_test_realm();

    let a = symbol_for(&first, &[JsValue::from("k")])?;
    let b = symbol_for(&second, &[JsValue::from("k")])?;
    assert!(!a.strict_equals(&b));

    // Registered in one realm, unknown to the other
    assert_eq!(key_for(&second, a)?, JsValue::Undefined);
    Ok(())
}

#[test]
fn test_registry_grows_per_distinct_key() {
    let realm = Realm::new();
    for key in ["a", "b", "a", "c", "b"] {
        realm.symbol_for(&JsValue::from(key));
    }
    assert_eq!(realm.symbol_registry().len(), 3);
}
