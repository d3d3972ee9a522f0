//! Integration tests for the symbol runtime, organized by feature
//!
//! These tests exercise realms through the public API only.
//!
//! ## Test Defaults
//!
//! Realms are created in strict mode unless overridden:
//!
//! ```bash
//! cargo test                       # Default: strict realms
//! SYMREALM_STRICT=0 cargo test     # Run the suite against sloppy-mode realms
//! ```

mod concurrency;
mod registry;
mod symbol;

use symrealm::{JsError, JsValue, PropertyKey, Realm, RealmOptions};

/// Create a new realm honouring the `SYMREALM_STRICT` override
pub fn create_test_realm() -> Realm {
    let strict = std::env::var("SYMREALM_STRICT")
        .map(|s| s != "0")
        .unwrap_or(true);
    Realm::with_options(RealmOptions::default().with_name("test").with_strict(strict))
}

/// The realm's `Symbol` constructor as a callable value
pub fn symbol_ctor(realm: &Realm) -> JsValue {
    JsValue::Object(realm.symbol_constructor().clone())
}

/// `Symbol(...args)`
pub fn call_symbol(realm: &Realm, args: &[JsValue]) -> Result<JsValue, JsError> {
    realm.call(&symbol_ctor(realm), JsValue::Undefined, args)
}

/// `new Symbol(...args)`
pub fn new_symbol(realm: &Realm, args: &[JsValue]) -> Result<JsValue, JsError> {
    realm.construct(&symbol_ctor(realm), args)
}

/// `Symbol[name]`
pub fn symbol_static(realm: &Realm, name: &str) -> Result<JsValue, JsError> {
    realm.get_named(&symbol_ctor(realm), name)
}

/// `receiver[name](...args)`
pub fn call_method(
    realm: &Realm,
    receiver: &JsValue,
    name: &str,
    args: &[JsValue],
) -> Result<JsValue, JsError> {
    let method = realm.get_named(receiver, name)?;
    realm.call(&method, receiver.clone(), args)
}

/// `Symbol.for(key)`
pub fn symbol_for(realm: &Realm, args: &[JsValue]) -> Result<JsValue, JsError> {
    call_method(realm, &symbol_ctor(realm), "for", args)
}

/// `Symbol.keyFor(value)`
pub fn key_for(realm: &Realm, value: JsValue) -> Result<JsValue, JsError> {
    call_method(realm, &symbol_ctor(realm), "keyFor", &[value])
}

/// Property key for a symbol value
pub fn symbol_key(value: &JsValue) -> PropertyKey {
    PropertyKey::from_value(value)
}
