//! Symbol-keyed property access
//!
//! [`SymbolScriptable`] is the contract a property store implements to host
//! symbol keys. It sits next to, not inside, the string/index path of
//! [`JsObject`]: lookups go by symbol identity only.

use tracing::trace;

use crate::error::JsError;
use crate::prelude::*;
use crate::symbol::JsSymbol;
use crate::value::{CheapClone, JsObject, JsValue, PropertyKey};

pub trait SymbolScriptable {
    /// Whether an own property keyed by `key` exists
    fn has_symbol(&self, key: &JsSymbol) -> bool;

    /// Value of the own data property keyed by `key`; `None` when absent.
    /// Accessors need a realm to run and are resolved by
    /// [`Realm::get`](crate::Realm::get) instead.
    fn get_symbol(&self, key: &JsSymbol) -> Option<JsValue>;

    /// Set or create the property keyed by `key`.
    ///
    /// Writing a read-only property is a no-op. Stores that may not carry own
    /// properties at all reject additions: silently, or with an error when
    /// `strict` is set.
    fn put_symbol(&mut self, key: &JsSymbol, value: JsValue, strict: bool) -> Result<(), JsError>;

    /// Remove the property keyed by `key`. No-op when absent or permanent;
    /// returns false only in the permanent case.
    fn delete_symbol(&mut self, key: &JsSymbol) -> bool;

    /// Own enumerable string/index keys followed by every own symbol key,
    /// enumerable or not.
    fn own_keys_with_symbols(&self) -> Vec<PropertyKey>;
}

impl SymbolScriptable for JsObject {
    fn has_symbol(&self, key: &JsSymbol) -> bool {
        self.has_own_property(&PropertyKey::Symbol(key.cheap_clone()))
    }

    fn get_symbol(&self, key: &JsSymbol) -> Option<JsValue> {
        self.get_own_property(&PropertyKey::Symbol(key.cheap_clone()))
            .filter(|prop| !prop.is_accessor())
            .map(|prop| prop.value.cheap_clone())
    }

    fn put_symbol(&mut self, key: &JsSymbol, value: JsValue, _strict: bool) -> Result<(), JsError> {
        self.set_property(PropertyKey::Symbol(key.cheap_clone()), value);
        Ok(())
    }

    fn delete_symbol(&mut self, key: &JsSymbol) -> bool {
        self.delete_property(&PropertyKey::Symbol(key.cheap_clone()))
    }

    fn own_keys_with_symbols(&self) -> Vec<PropertyKey> {
        let mut keys = self.own_enumerable_keys();
        keys.extend(self.properties.keys().filter(|key| key.is_symbol()).cloned());
        keys
    }
}

/// A primitive symbol as a property receiver: it never has own properties and
/// refuses to gain any.
impl SymbolScriptable for JsSymbol {
    fn has_symbol(&self, _key: &JsSymbol) -> bool {
        false
    }

    fn get_symbol(&self, _key: &JsSymbol) -> Option<JsValue> {
        None
    }

    fn put_symbol(&mut self, key: &JsSymbol, _value: JsValue, strict: bool) -> Result<(), JsError> {
        reject_primitive_write(self, &PropertyKey::Symbol(key.cheap_clone()), strict)
    }

    fn delete_symbol(&mut self, _key: &JsSymbol) -> bool {
        true
    }

    fn own_keys_with_symbols(&self) -> Vec<PropertyKey> {
        Vec::new()
    }
}

/// Write-protection rule for primitive symbol receivers, shared by the
/// symbol-keyed and string-keyed paths.
pub(crate) fn reject_primitive_write(
    target: &JsSymbol,
    key: &PropertyKey,
    strict: bool,
) -> Result<(), JsError> {
    trace!(%key, strict, "write to primitive symbol ignored");
    if strict {
        return Err(JsError::StrictModeAssignToSymbol {
            key: key.to_string(),
            symbol: target.to_text().to_string(),
        });
    }
    Ok(())
}
