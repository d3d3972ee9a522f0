//! Tests for Symbol() and the Symbol.prototype methods

use super::{call_method, call_symbol, create_test_realm, symbol_static};
use symrealm::{JsError, JsValue, PropertyKey, TypeTag};

#[test]
fn test_symbol_typeof() -> Result<(), JsError> {
    let realm = create_test_realm();
    assert_eq!(call_symbol(&realm, &[])?.type_of(), "symbol");
    assert_eq!(
        call_symbol(&realm, &[JsValue::from("foo")])?.type_tag(),
        TypeTag::Symbol
    );
    Ok(())
}

#[test]
fn test_symbol_uniqueness() -> Result<(), JsError> {
    let realm = create_test_realm();
    // Each Symbol() call should create a unique symbol
    assert_ne!(call_symbol(&realm, &[])?, call_symbol(&realm, &[])?);
    assert_ne!(
        call_symbol(&realm, &[JsValue::from("x")])?,
        call_symbol(&realm, &[JsValue::from("x")])?
    );
    Ok(())
}

#[test]
fn test_symbol_identity_survives_copies() -> Result<(), JsError> {
    let realm = create_test_realm();
    let sym = call_symbol(&realm, &[JsValue::from("x")])?;
    let copy = sym.clone();
    assert!(sym.strict_equals(&copy));
    Ok(())
}

#[test]
fn test_symbol_to_string() -> Result<(), JsError> {
    let realm = create_test_realm();
    let foo = call_symbol(&realm, &[JsValue::from("foo")])?;
    assert_eq!(
        call_method(&realm, &foo, "toString", &[])?,
        JsValue::from("Symbol(foo)")
    );

    let empty = call_symbol(&realm, &[])?;
    assert_eq!(
        call_method(&realm, &empty, "toString", &[])?,
        JsValue::from("Symbol()")
    );
    Ok(())
}

#[test]
fn test_symbol_description_coercion() -> Result<(), JsError> {
    let realm = create_test_realm();
    let undefined = call_symbol(&realm, &[JsValue::Undefined])?;
    assert_eq!(realm.get_named(&undefined, "description")?, JsValue::from(""));

    let number = call_symbol(&realm, &[JsValue::from(42)])?;
    assert_eq!(realm.get_named(&number, "description")?, JsValue::from("42"));

    let null = call_symbol(&realm, &[JsValue::Null])?;
    assert_eq!(
        call_method(&realm, &null, "toString", &[])?,
        JsValue::from("Symbol(null)")
    );
    Ok(())
}

#[test]
fn test_to_string_requires_symbol_receiver() -> Result<(), JsError> {
    let realm = create_test_realm();
    let proto = JsValue::Object(realm.symbol_prototype().clone());
    let to_string = realm.get_named(&proto, "toString")?;

    let err = realm.call(&to_string, JsValue::from("nope"), &[]);
    assert_eq!(err, Err(JsError::type_error("Symbol expected")));
    Ok(())
}

#[test]
fn test_value_of_on_primitive() -> Result<(), JsError> {
    let realm = create_test_realm();
    let sym = call_symbol(&realm, &[JsValue::from("v")])?;
    assert_eq!(call_method(&realm, &sym, "valueOf", &[])?, sym);
    Ok(())
}

#[test]
fn test_prototype_shape() -> Result<(), JsError> {
    let realm = create_test_realm();
    let proto = symbol_static(&realm, "prototype")?;
    assert!(matches!(&proto, JsValue::Object(obj) if symrealm::JsObjectRef::ptr_eq(obj, realm.symbol_prototype())));

    let ctor = realm.get_named(&proto, "constructor")?;
    assert_eq!(ctor, JsValue::Object(realm.symbol_constructor().clone()));

    let tag = realm.get(&proto, &super::symbol_key(&symbol_static(&realm, "toStringTag")?))?;
    assert_eq!(tag, JsValue::from("Symbol"));
    Ok(())
}

#[test]
fn test_function_lengths() -> Result<(), JsError> {
    let realm = create_test_realm();
    assert_eq!(symbol_static(&realm, "length")?, JsValue::from(0));
    let for_fn = symbol_static(&realm, "for")?;
    assert_eq!(realm.get_named(&for_fn, "length")?, JsValue::from(1));
    let key_for_fn = symbol_static(&realm, "keyFor")?;
    assert_eq!(realm.get_named(&key_for_fn, "length")?, JsValue::from(1));
    assert_eq!(realm.get_named(&key_for_fn, "name")?, JsValue::from("keyFor"));
    Ok(())
}

#[test]
fn test_static_methods_not_enumerable() {
    let realm = create_test_realm();
    let keys = realm.own_enumerable_keys(&super::symbol_ctor(&realm));
    assert!(!keys.contains(&PropertyKey::from("for")));
    assert!(!keys.contains(&PropertyKey::from("keyFor")));
    assert!(keys.is_empty());
}

#[test]
fn test_to_primitive_hook() -> Result<(), JsError> {
    let realm = create_test_realm();
    let sym = call_symbol(&realm, &[JsValue::from("p")])?;
    let hook_key = super::symbol_key(&symbol_static(&realm, "toPrimitive")?);
    let hook = realm.get(&sym, &hook_key)?;
    assert!(hook.is_callable());
    assert_eq!(realm.call(&hook, sym.clone(), &[JsValue::from("default")])?, sym);
    Ok(())
}
