//! Realm: one global execution scope and the symbol state it owns
//!
//! A realm owns its `Symbol` constructor and prototype, its well-known symbol
//! table, and its `Symbol.for` registry. Realms share nothing: the same
//! registry key in two realms yields two distinct symbols.

use tracing::debug;

use crate::builtins;
use crate::error::JsError;
use crate::options::RealmOptions;
use crate::prelude::*;
use crate::property::{SymbolScriptable, reject_primitive_write};
use crate::symbol::{JsSymbol, SymbolRegistry, SymbolValue, WellKnownSymbol, WellKnownSymbols, gate};
use crate::value::{
    CheapClone, ExoticObject, JsObjectRef, JsString, JsValue, NativeFunction, PropertyKey,
    create_object,
};

pub struct Realm {
    options: RealmOptions,
    object_prototype: JsObjectRef,
    symbol_prototype: JsObjectRef,
    symbol_constructor: JsObjectRef,
    well_known: WellKnownSymbols,
    /// Created on the first `Symbol.for` / `Symbol.keyFor` that needs it
    registry: OnceLock<SymbolRegistry>,
}

impl Realm {
    /// Create a realm with default options
    pub fn new() -> Self {
        Self::with_options(RealmOptions::default())
    }

    pub fn with_options(options: RealmOptions) -> Self {
        let object_prototype = create_object(None);
        let symbol_prototype = create_object(Some(object_prototype.cheap_clone()));
        let well_known = WellKnownSymbols::create();
        let symbol_constructor =
            builtins::create_symbol_constructor(&symbol_prototype, &well_known);
        builtins::init_symbol_prototype(&symbol_prototype, &symbol_constructor, &well_known);

        debug!(realm = %options.name, strict = options.strict, "realm initialized");

        Self {
            options,
            object_prototype,
            symbol_prototype,
            symbol_constructor,
            well_known,
            registry: OnceLock::new(),
        }
    }

    pub fn options(&self) -> &RealmOptions {
        &self.options
    }

    pub fn object_prototype(&self) -> &JsObjectRef {
        &self.object_prototype
    }

    pub fn symbol_prototype(&self) -> &JsObjectRef {
        &self.symbol_prototype
    }

    pub fn symbol_constructor(&self) -> &JsObjectRef {
        &self.symbol_constructor
    }

    pub fn well_known(&self) -> &WellKnownSymbols {
        &self.well_known
    }

    pub fn well_known_symbol(&self, which: WellKnownSymbol) -> JsSymbol {
        self.well_known.get(which).cheap_clone()
    }

    /// This realm's `Symbol.for` registry, created on first use
    pub fn symbol_registry(&self) -> &SymbolRegistry {
        self.registry.get_or_init(|| {
            debug!(realm = %self.options.name, "creating global symbol registry");
            SymbolRegistry::with_capacity(self.options.registry_capacity)
        })
    }

    pub fn has_symbol_registry(&self) -> bool {
        self.registry.get().is_some()
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Symbol.for / Symbol.keyFor
    // ═══════════════════════════════════════════════════════════════════════════

    /// `Symbol.for(key)`. The key goes through ToString, so a missing
    /// argument (`undefined`) registers under `"undefined"`.
    pub fn symbol_for(&self, key: &JsValue) -> JsSymbol {
        self.symbol_registry().for_key(key.to_js_string())
    }

    /// `Symbol.keyFor(value)`. `Ok(None)` for symbols that were never
    /// registered, an error for anything that is not a symbol.
    pub fn symbol_key_for(&self, value: &JsValue) -> Result<Option<JsString>, JsError> {
        let symbol = SymbolValue::from_value(value).ok_or(JsError::NotASymbol)?;
        // An untouched registry cannot hold the symbol; don't create it just to scan it
        Ok(self
            .registry
            .get()
            .and_then(|registry| registry.key_for(&symbol)))
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Coercions
    // ═══════════════════════════════════════════════════════════════════════════

    /// Object coercion (`Object(value)`) for objects and symbols
    pub fn to_object(&self, value: &JsValue) -> Result<JsObjectRef, JsError> {
        match value {
            JsValue::Object(obj) => Ok(obj.cheap_clone()),
            JsValue::Symbol(sym) => Ok(gate::box_to_object(
                sym,
                Some(self.symbol_prototype.cheap_clone()),
            )),
            JsValue::Undefined | JsValue::Null => Err(JsError::type_error(
                "Cannot convert undefined or null to object",
            )),
            other => Err(JsError::type_error(format!(
                "Object coercion of {} values is not supported",
                other.type_of()
            ))),
        }
    }

    /// Unwrap boxed symbols; every other value is returned as is
    pub fn to_primitive(&self, value: &JsValue) -> JsValue {
        match SymbolValue::from_value(value) {
            Some(symbol) => JsValue::Symbol(symbol.unbox().cheap_clone()),
            None => value.cheap_clone(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Call dispatch
    // ═══════════════════════════════════════════════════════════════════════════

    fn native_function(callee: &JsValue) -> Option<NativeFunction> {
        match callee {
            JsValue::Object(obj) => match &obj.borrow().exotic {
                ExoticObject::Function(func) => Some(func.clone()),
                _ => None,
            },
            _ => None,
        }
    }

    /// Call `callee` as a plain function
    pub fn call(&self, callee: &JsValue, this: JsValue, args: &[JsValue]) -> Result<JsValue, JsError> {
        let func = Self::native_function(callee).ok_or_else(|| {
            JsError::type_error(format!("{} is not a function", callee.to_js_string()))
        })?;
        (func.func)(self, this, args)
    }

    /// Call `callee` with `new`
    pub fn construct(&self, callee: &JsValue, args: &[JsValue]) -> Result<JsValue, JsError> {
        let func = Self::native_function(callee).ok_or_else(|| {
            JsError::type_error(format!("{} is not a constructor", callee.to_js_string()))
        })?;
        let construct = func
            .construct
            .ok_or_else(|| JsError::type_error(format!("{} is not a constructor", func.name)))?;
        construct(self, JsValue::Undefined, args)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Property access on arbitrary receivers
    // ═══════════════════════════════════════════════════════════════════════════

    /// Read `receiver[key]`, walking the prototype chain. Primitive symbols
    /// start the walk at `Symbol.prototype`. Getters run with `this` bound to
    /// the receiver, whatever the key kind.
    pub fn get(&self, receiver: &JsValue, key: &PropertyKey) -> Result<JsValue, JsError> {
        let start = match receiver {
            JsValue::Object(obj) => obj.cheap_clone(),
            JsValue::Symbol(_) => self.symbol_prototype.cheap_clone(),
            JsValue::Undefined | JsValue::Null => {
                return Err(JsError::type_error(format!(
                    "Cannot read properties of {} (reading '{}')",
                    receiver.to_js_string(),
                    key
                )));
            }
            _ => return Ok(JsValue::Undefined),
        };

        let prop = start.borrow().get_property_descriptor(key);
        match prop {
            None => Ok(JsValue::Undefined),
            Some(prop) => match prop.getter {
                Some(getter) => self.call(&JsValue::Object(getter), receiver.cheap_clone(), &[]),
                None => Ok(prop.value),
            },
        }
    }

    /// Shorthand for [`get`](Self::get) with a string key
    pub fn get_named(&self, receiver: &JsValue, name: &str) -> Result<JsValue, JsError> {
        self.get(receiver, &PropertyKey::from(name))
    }

    /// Write `receiver[key] = value` in the realm's default evaluation mode
    pub fn put(&self, receiver: &JsValue, key: PropertyKey, value: JsValue) -> Result<(), JsError> {
        self.put_with_mode(receiver, key, value, self.options.strict)
    }

    /// Write `receiver[key] = value`. Primitive symbols refuse new own
    /// properties: silently, or with a TypeError in strict mode.
    pub fn put_with_mode(
        &self,
        receiver: &JsValue,
        key: PropertyKey,
        value: JsValue,
        strict: bool,
    ) -> Result<(), JsError> {
        match receiver {
            JsValue::Object(obj) => {
                let mut o = obj.borrow_mut();
                match key {
                    PropertyKey::Symbol(sym) => o.put_symbol(&sym, value, strict),
                    other => {
                        o.set_property(other, value);
                        Ok(())
                    }
                }
            }
            JsValue::Symbol(target) => match &key {
                PropertyKey::Symbol(sym) => target.cheap_clone().put_symbol(sym, value, strict),
                other => reject_primitive_write(target, other, strict),
            },
            JsValue::Undefined | JsValue::Null => Err(JsError::type_error(format!(
                "Cannot set properties of {} (setting '{}')",
                receiver.to_js_string(),
                key
            ))),
            // Other primitives have no storage of their own here
            _ => Ok(()),
        }
    }

    /// Own-property check, no prototype walk
    pub fn has_own(&self, receiver: &JsValue, key: &PropertyKey) -> bool {
        match (receiver, key) {
            (JsValue::Object(obj), PropertyKey::Symbol(sym)) => obj.borrow().has_symbol(sym),
            (JsValue::Object(obj), other) => obj.borrow().has_own_property(other),
            (JsValue::Symbol(target), PropertyKey::Symbol(sym)) => target.has_symbol(sym),
            _ => false,
        }
    }

    /// `delete receiver[key]`; false only for permanent properties
    pub fn delete(&self, receiver: &JsValue, key: &PropertyKey) -> bool {
        match (receiver, key) {
            (JsValue::Object(obj), PropertyKey::Symbol(sym)) => obj.borrow_mut().delete_symbol(sym),
            (JsValue::Object(obj), other) => obj.borrow_mut().delete_property(other),
            (JsValue::Symbol(target), PropertyKey::Symbol(sym)) => {
                target.cheap_clone().delete_symbol(sym)
            }
            _ => true,
        }
    }

    /// Reflection keys: enumerable string keys plus every symbol key
    pub fn own_keys_with_symbols(&self, value: &JsValue) -> Result<Vec<PropertyKey>, JsError> {
        match value {
            JsValue::Object(obj) => Ok(obj.borrow().own_keys_with_symbols()),
            JsValue::Symbol(sym) => Ok(sym.own_keys_with_symbols()),
            JsValue::Undefined | JsValue::Null => Err(JsError::type_error(
                "Cannot convert undefined or null to object",
            )),
            _ => Ok(Vec::new()),
        }
    }

    /// `for-in` style keys: enumerable string keys only
    pub fn own_enumerable_keys(&self, value: &JsValue) -> Vec<PropertyKey> {
        match value {
            JsValue::Object(obj) => obj.borrow().own_enumerable_keys(),
            _ => Vec::new(),
        }
    }
}

impl Default for Realm {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Realm {
    fn drop(&mut self) {
        // Symbol.prototype.constructor and Symbol.prototype form a reference cycle
        self.symbol_prototype
            .borrow_mut()
            .properties
            .shift_remove(&PropertyKey::from("constructor"));
    }
}

impl fmt::Debug for Realm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Realm")
            .field("name", &self.options.name)
            .field("strict", &self.options.strict)
            .field("registry", &self.registry.get())
            .finish()
    }
}
