//! JavaScript value representation
//!
//! The core JsValue type and the object storage that hosts string- and
//! symbol-keyed properties.

use crate::error::JsError;
use crate::prelude::*;
use crate::realm::Realm;
use crate::symbol::JsSymbol;

/// Trait for types that have cheap (O(1), reference-counted) clones.
///
/// This trait makes it explicit when a clone is cheap (just incrementing a reference count)
/// vs when it might be expensive (copying data).
///
/// # Examples
/// - `JsObjectRef` (Arc<RwLock<JsObject>>) - cheap clone
/// - `JsString` (Arc<str>) - cheap clone
/// - `JsSymbol` (two Arcs) - cheap clone
pub trait CheapClone: Clone {
    /// Create a cheap (reference-counted) clone of this value.
    fn cheap_clone(&self) -> Self {
        self.clone()
    }
}

impl<T: ?Sized> CheapClone for Arc<T> {}

/// Result of the `typeof` query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Undefined,
    Boolean,
    Number,
    String,
    Symbol,
    Object,
    Function,
}

impl TypeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Undefined => "undefined",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Symbol => "symbol",
            TypeTag::Object => "object",
            TypeTag::Function => "function",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A JavaScript value
#[derive(Clone, Default)]
pub enum JsValue {
    #[default]
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(JsString),
    /// Primitive symbol. Boxed symbols are `Object`s with a symbol slot.
    Symbol(JsSymbol),
    Object(JsObjectRef),
}

impl CheapClone for JsValue {}

impl JsValue {
    /// Check if this value is null or undefined
    pub fn is_null_or_undefined(&self) -> bool {
        matches!(self, JsValue::Null | JsValue::Undefined)
    }

    /// Check if this value is callable (a function)
    pub fn is_callable(&self) -> bool {
        match self {
            JsValue::Object(obj) => obj.borrow().is_callable(),
            _ => false,
        }
    }

    /// Get the primitive symbol, if this is one
    pub fn as_symbol(&self) -> Option<&JsSymbol> {
        match self {
            JsValue::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    /// Get the typeof tag for this value
    pub fn type_tag(&self) -> TypeTag {
        match self {
            JsValue::Undefined => TypeTag::Undefined,
            JsValue::Null => TypeTag::Object, // Historical quirk
            JsValue::Boolean(_) => TypeTag::Boolean,
            JsValue::Number(_) => TypeTag::Number,
            JsValue::String(_) => TypeTag::String,
            JsValue::Symbol(_) => TypeTag::Symbol,
            JsValue::Object(obj) => {
                if obj.borrow().is_callable() {
                    TypeTag::Function
                } else {
                    TypeTag::Object
                }
            }
        }
    }

    /// Get the typeof result for this value
    pub fn type_of(&self) -> &'static str {
        self.type_tag().as_str()
    }

    /// Convert to string (ToString)
    pub fn to_js_string(&self) -> JsString {
        match self {
            JsValue::Undefined => JsString::from("undefined"),
            JsValue::Null => JsString::from("null"),
            JsValue::Boolean(true) => JsString::from("true"),
            JsValue::Boolean(false) => JsString::from("false"),
            JsValue::Number(n) => {
                if n.is_nan() {
                    JsString::from("NaN")
                } else if n.is_infinite() {
                    if *n > 0.0 {
                        JsString::from("Infinity")
                    } else {
                        JsString::from("-Infinity")
                    }
                } else if *n == 0.0 {
                    JsString::from("0")
                } else {
                    JsString::from(n.to_string())
                }
            }
            JsValue::String(s) => s.cheap_clone(),
            JsValue::Symbol(s) => s.to_text(),
            JsValue::Object(obj) => match &obj.borrow().exotic {
                ExoticObject::Symbol(sym) => sym.to_text(),
                _ => JsString::from("[object Object]"),
            },
        }
    }

    /// Strict equality (===)
    pub fn strict_equals(&self, other: &JsValue) -> bool {
        match (self, other) {
            (JsValue::Undefined, JsValue::Undefined) => true,
            (JsValue::Null, JsValue::Null) => true,
            (JsValue::Boolean(a), JsValue::Boolean(b)) => a == b,
            // NaN !== NaN falls out of f64 comparison
            (JsValue::Number(a), JsValue::Number(b)) => a == b,
            (JsValue::String(a), JsValue::String(b)) => a == b,
            (JsValue::Symbol(a), JsValue::Symbol(b)) => a == b,
            (JsValue::Object(a), JsValue::Object(b)) => JsObjectRef::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for JsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Undefined => write!(f, "undefined"),
            JsValue::Null => write!(f, "null"),
            JsValue::Boolean(b) => write!(f, "{}", b),
            JsValue::Number(n) => write!(f, "{}", n),
            JsValue::String(s) => write!(f, "\"{}\"", s.as_str()),
            JsValue::Symbol(s) => write!(f, "{}", s.to_text()),
            JsValue::Object(obj) => fmt::Debug::fmt(obj, f),
        }
    }
}

impl PartialEq for JsValue {
    fn eq(&self, other: &Self) -> bool {
        self.strict_equals(other)
    }
}

// Conversions from Rust types

impl From<bool> for JsValue {
    fn from(b: bool) -> Self {
        JsValue::Boolean(b)
    }
}

impl From<f64> for JsValue {
    fn from(n: f64) -> Self {
        JsValue::Number(n)
    }
}

impl From<i32> for JsValue {
    fn from(n: i32) -> Self {
        JsValue::Number(n as f64)
    }
}

impl From<&str> for JsValue {
    fn from(s: &str) -> Self {
        JsValue::String(JsString::from(s))
    }
}

impl From<String> for JsValue {
    fn from(s: String) -> Self {
        JsValue::String(JsString::from(s))
    }
}

impl From<JsString> for JsValue {
    fn from(s: JsString) -> Self {
        JsValue::String(s)
    }
}

impl From<JsSymbol> for JsValue {
    fn from(s: JsSymbol) -> Self {
        JsValue::Symbol(s)
    }
}

impl From<JsObjectRef> for JsValue {
    fn from(obj: JsObjectRef) -> Self {
        JsValue::Object(obj)
    }
}

/// Reference-counted string, shareable across threads
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JsString(Arc<str>);

// JsString wraps Arc<str>, so clone is cheap (just reference count increment)
impl CheapClone for JsString {}

impl JsString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn parse<F: core::str::FromStr>(&self) -> Result<F, F::Err> {
        self.0.parse()
    }
}

impl AsRef<str> for JsString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::borrow::Borrow<str> for JsString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for JsString {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for JsString {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl From<&str> for JsString {
    fn from(s: &str) -> Self {
        JsString(s.into())
    }
}

impl From<String> for JsString {
    fn from(s: String) -> Self {
        JsString(s.into())
    }
}

impl fmt::Debug for JsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0)
    }
}

impl fmt::Display for JsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared handle to a heap-allocated object
///
/// Mirrors the `borrow()`/`borrow_mut()` API of a `RefCell`, backed by a
/// `parking_lot::RwLock` so a realm can be shared between threads.
#[derive(Clone)]
pub struct JsObjectRef(Arc<RwLock<JsObject>>);

impl CheapClone for JsObjectRef {}

impl JsObjectRef {
    pub fn new(object: JsObject) -> Self {
        JsObjectRef(Arc::new(RwLock::new(object)))
    }

    pub fn borrow(&self) -> RwLockReadGuard<'_, JsObject> {
        self.0.read()
    }

    pub fn borrow_mut(&self) -> RwLockWriteGuard<'_, JsObject> {
        self.0.write()
    }

    /// Identity comparison
    pub fn ptr_eq(a: &JsObjectRef, b: &JsObjectRef) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Debug for JsObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A writer may hold the lock while formatting a value that points back here
        let Some(obj) = self.0.try_read() else {
            return write!(f, "[object <locked>]");
        };
        match &obj.exotic {
            ExoticObject::Ordinary => write!(f, "{{...}}"),
            ExoticObject::Function(func) => write!(f, "[Function: {}]", func.name),
            ExoticObject::Symbol(sym) => write!(f, "[{}]", sym.to_text()),
        }
    }
}

/// A JavaScript object
#[derive(Debug)]
pub struct JsObject {
    /// Prototype link
    pub prototype: Option<JsObjectRef>,
    /// Whether the object can have properties added
    pub extensible: bool,
    /// Object properties, in insertion order
    pub properties: IndexMap<PropertyKey, Property>,
    /// Exotic object behavior
    pub exotic: ExoticObject,
}

impl JsObject {
    /// Create a new ordinary object
    pub fn new() -> Self {
        Self {
            prototype: None,
            extensible: true,
            properties: index_map_new(),
            exotic: ExoticObject::Ordinary,
        }
    }

    /// Create a new ordinary object with a prototype
    pub fn with_prototype(prototype: JsObjectRef) -> Self {
        Self {
            prototype: Some(prototype),
            ..Self::new()
        }
    }

    /// Check if this object is callable
    pub fn is_callable(&self) -> bool {
        matches!(self.exotic, ExoticObject::Function(_))
    }

    /// The primitive symbol held in the hidden slot of a boxed symbol
    pub fn symbol_data(&self) -> Option<&JsSymbol> {
        match &self.exotic {
            ExoticObject::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    /// Get an own property
    pub fn get_own_property(&self, key: &PropertyKey) -> Option<&Property> {
        self.properties.get(key)
    }

    /// Get a property descriptor, searching the prototype chain
    pub fn get_property_descriptor(&self, key: &PropertyKey) -> Option<Property> {
        if let Some(prop) = self.properties.get(key) {
            return Some(prop.clone());
        }

        if let Some(ref proto) = self.prototype {
            return proto.borrow().get_property_descriptor(key);
        }

        None
    }

    /// Set a property. Read-only properties and non-extensible objects ignore the write.
    pub fn set_property(&mut self, key: PropertyKey, value: JsValue) {
        if let Some(prop) = self.properties.get_mut(&key) {
            if prop.writable && !prop.is_accessor() {
                prop.value = value;
            }
        } else if self.extensible {
            self.properties.insert(key, Property::data(value));
        }
    }

    /// Define a property with attributes
    pub fn define_property(&mut self, key: PropertyKey, prop: Property) {
        self.properties.insert(key, prop);
    }

    /// Remove an own property. Returns false only if the property is permanent.
    pub fn delete_property(&mut self, key: &PropertyKey) -> bool {
        match self.properties.get(key) {
            None => true,
            Some(prop) if !prop.configurable => false,
            Some(_) => {
                self.properties.shift_remove(key);
                true
            }
        }
    }

    /// Check if object has own property
    pub fn has_own_property(&self, key: &PropertyKey) -> bool {
        self.properties.contains_key(key)
    }

    /// Own enumerable string and index keys, the set a `for-in` loop visits.
    /// Symbol keys are never part of it.
    pub fn own_enumerable_keys(&self) -> Vec<PropertyKey> {
        let mut indices: Vec<u32> = Vec::new();
        let mut strings: Vec<PropertyKey> = Vec::new();
        for (key, prop) in &self.properties {
            if !prop.enumerable {
                continue;
            }
            match key {
                PropertyKey::Index(i) => indices.push(*i),
                PropertyKey::String(_) => strings.push(key.clone()),
                PropertyKey::Symbol(_) => {}
            }
        }
        indices.sort_unstable();
        indices
            .into_iter()
            .map(PropertyKey::Index)
            .chain(strings)
            .collect()
    }
}

impl Default for JsObject {
    fn default() -> Self {
        Self::new()
    }
}

/// Property key (string, index, or symbol)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    String(JsString),
    Index(u32),
    Symbol(JsSymbol),
}

impl PropertyKey {
    /// ToPropertyKey: symbols (primitive or boxed) keep their identity,
    /// everything else goes through string coercion.
    pub fn from_value(value: &JsValue) -> Self {
        match value {
            JsValue::Number(n) => {
                let idx = *n as u32;
                if idx as f64 == *n && *n >= 0.0 {
                    PropertyKey::Index(idx)
                } else {
                    PropertyKey::String(value.to_js_string())
                }
            }
            JsValue::String(s) => PropertyKey::from(s.cheap_clone()),
            JsValue::Symbol(s) => PropertyKey::Symbol(s.cheap_clone()),
            JsValue::Object(obj) => {
                if let Some(sym) = obj.borrow().symbol_data() {
                    return PropertyKey::Symbol(sym.cheap_clone());
                }
                PropertyKey::String(value.to_js_string())
            }
            _ => PropertyKey::String(value.to_js_string()),
        }
    }

    /// Check if this is a symbol key
    pub fn is_symbol(&self) -> bool {
        matches!(self, PropertyKey::Symbol(_))
    }

    /// Get the symbol, if this is a symbol key
    pub fn as_symbol(&self) -> Option<&JsSymbol> {
        match self {
            PropertyKey::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    /// Check if this key equals a string literal (avoids allocation)
    #[inline]
    pub fn eq_str(&self, s: &str) -> bool {
        match self {
            PropertyKey::String(js_str) => js_str.as_str() == s,
            PropertyKey::Index(_) | PropertyKey::Symbol(_) => false,
        }
    }
}

impl From<&str> for PropertyKey {
    #[inline]
    fn from(s: &str) -> Self {
        PropertyKey::from(JsString::from(s))
    }
}

impl From<JsString> for PropertyKey {
    #[inline]
    fn from(s: JsString) -> Self {
        // Fast path: check first char is a digit before parsing
        if let Some(first) = s.as_str().bytes().next() {
            if first.is_ascii_digit() {
                if let Ok(idx) = s.parse::<u32>() {
                    // Verify it's canonical (no leading zeros except "0")
                    if idx.to_string() == s.as_str() {
                        return PropertyKey::Index(idx);
                    }
                }
            }
        }
        PropertyKey::String(s)
    }
}

impl From<u32> for PropertyKey {
    fn from(idx: u32) -> Self {
        PropertyKey::Index(idx)
    }
}

impl From<JsSymbol> for PropertyKey {
    fn from(sym: JsSymbol) -> Self {
        PropertyKey::Symbol(sym)
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::String(s) => write!(f, "{}", s),
            PropertyKey::Index(i) => write!(f, "{}", i),
            PropertyKey::Symbol(s) => write!(f, "{}", s.to_text()),
        }
    }
}

/// Object property descriptor
#[derive(Debug, Clone)]
pub struct Property {
    pub value: JsValue,
    pub writable: bool,
    pub enumerable: bool,
    pub configurable: bool,
    /// Getter function (for accessor properties)
    pub getter: Option<JsObjectRef>,
}

impl Property {
    pub fn data(value: JsValue) -> Self {
        Self::with_attributes(value, true, true, true)
    }

    /// Non-writable, non-enumerable, non-configurable
    pub fn frozen(value: JsValue) -> Self {
        Self::with_attributes(value, false, false, false)
    }

    /// Create a non-enumerable accessor property with only a getter
    pub fn getter(getter: JsObjectRef) -> Self {
        Self {
            value: JsValue::Undefined,
            writable: false,
            enumerable: false,
            configurable: true,
            getter: Some(getter),
        }
    }

    /// Check if this is an accessor property
    pub fn is_accessor(&self) -> bool {
        self.getter.is_some()
    }

    /// Create a property with custom attributes
    pub fn with_attributes(
        value: JsValue,
        writable: bool,
        enumerable: bool,
        configurable: bool,
    ) -> Self {
        Self {
            value,
            writable,
            enumerable,
            configurable,
            getter: None,
        }
    }
}

/// Exotic object behavior
#[derive(Debug)]
pub enum ExoticObject {
    /// Ordinary object
    Ordinary,
    /// Function exotic object
    Function(NativeFunction),
    /// Boxed symbol: hidden slot holding the primitive it was boxed from
    Symbol(JsSymbol),
}

/// Native function signature: `(realm, this, args)`
pub type NativeFn = fn(&Realm, JsValue, &[JsValue]) -> Result<JsValue, JsError>;

/// Native function wrapper
#[derive(Clone)]
pub struct NativeFunction {
    pub name: JsString,
    pub func: NativeFn,
    pub arity: usize,
    /// Behavior under `new`; `None` means "not a constructor"
    pub construct: Option<NativeFn>,
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("constructor", &self.construct.is_some())
            .finish()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper functions for creating objects
// ═══════════════════════════════════════════════════════════════════════════════

/// Create a new ordinary object
pub fn create_object(prototype: Option<JsObjectRef>) -> JsObjectRef {
    let mut obj = JsObject::new();
    obj.prototype = prototype;
    JsObjectRef::new(obj)
}

/// Create a function object with `name` and `length` properties
pub fn create_function(func: NativeFunction) -> JsObjectRef {
    let mut f = JsObject::new();
    f.properties.insert(
        PropertyKey::from("length"),
        Property::with_attributes(JsValue::Number(func.arity as f64), false, false, true),
    );
    f.properties.insert(
        PropertyKey::from("name"),
        Property::with_attributes(JsValue::String(func.name.cheap_clone()), false, false, true),
    );
    f.exotic = ExoticObject::Function(func);
    JsObjectRef::new(f)
}

/// Create a plain (non-constructor) native function object
pub fn create_native(name: &str, func: NativeFn, arity: usize) -> JsObjectRef {
    create_function(NativeFunction {
        name: JsString::from(name),
        func,
        arity,
        construct: None,
    })
}

/// Register a native method on an object as a non-enumerable property
pub fn register_method(obj: &mut JsObject, name: &str, func: NativeFn, arity: usize) {
    let f = create_native(name, func, arity);
    obj.define_property(
        PropertyKey::from(name),
        Property::with_attributes(JsValue::Object(f), true, false, true),
    );
}
