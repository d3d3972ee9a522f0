//! ECMAScript `Symbol` values for an embeddable script runtime
//!
//! Symbols are identity-only property keys. Each [`Realm`] owns its `Symbol`
//! constructor, its well-known symbols and its `Symbol.for` registry; realms
//! may be shared between threads.
//!
//! # Example
//!
//! ```
//! use symrealm::{JsValue, Realm};
//!
//! let realm = Realm::new();
//! let ctor = JsValue::Object(realm.symbol_constructor().clone());
//!
//! let a = realm.call(&ctor, JsValue::Undefined, &[JsValue::from("id")]).unwrap();
//! let b = realm.call(&ctor, JsValue::Undefined, &[JsValue::from("id")]).unwrap();
//! assert_ne!(a, b);
//! assert_eq!(a.type_of(), "symbol");
//!
//! let registered = realm.symbol_for(&JsValue::from("app"));
//! assert_eq!(realm.symbol_for(&JsValue::from("app")), registered);
//!
//! assert!(realm.construct(&ctor, &[]).is_err());
//! ```

pub mod builtins;
pub mod error;
pub mod options;
pub mod prelude;
pub mod property;
pub mod realm;
pub mod symbol;
pub mod value;

pub use error::JsError;
pub use options::RealmOptions;
pub use property::SymbolScriptable;
pub use realm::Realm;
pub use symbol::{
    JsSymbol, SymbolKey, SymbolRegistry, SymbolValue, WellKnownSymbol, WellKnownSymbols, gate,
};
pub use value::CheapClone;
pub use value::JsObject;
pub use value::JsObjectRef;
pub use value::JsString;
pub use value::JsValue;
pub use value::Property;
pub use value::PropertyKey;
pub use value::TypeTag;
