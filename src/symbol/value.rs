use super::SymbolKey;
use crate::prelude::*;
use crate::value::{CheapClone, ExoticObject, JsObject, JsObjectRef, JsString, JsValue, TypeTag};

/// Primitive symbol
///
/// Immutable after construction: the key and description are fixed at birth.
/// Equality and hashing look only at the key.
#[derive(Clone)]
pub struct JsSymbol {
    key: SymbolKey,
    description: JsString,
}

impl CheapClone for JsSymbol {}

impl JsSymbol {
    /// Build a primitive symbol. Only the construction gate calls this.
    ///
    /// A missing or `undefined` description is stored as empty text; anything
    /// else goes through ToString.
    pub(crate) fn construct(description: Option<&JsValue>, key: Option<SymbolKey>) -> Self {
        let description = match description {
            None | Some(JsValue::Undefined) => JsString::from(""),
            Some(other) => other.to_js_string(),
        };
        Self {
            key: key.unwrap_or_default(),
            description,
        }
    }

    pub fn key(&self) -> &SymbolKey {
        &self.key
    }

    pub fn description(&self) -> &JsString {
        &self.description
    }

    /// `"Symbol(" + description + ")"`, for display only, never a lookup key
    pub fn to_text(&self) -> JsString {
        JsString::from(format!("Symbol({})", self.description))
    }

    /// Fresh wrapper object whose hidden slot holds this symbol
    pub(crate) fn wrap(&self, prototype: Option<JsObjectRef>) -> JsObjectRef {
        let mut obj = JsObject::new();
        obj.prototype = prototype;
        obj.exotic = ExoticObject::Symbol(self.cheap_clone());
        JsObjectRef::new(obj)
    }
}

impl PartialEq for JsSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for JsSymbol {}

impl Hash for JsSymbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Debug for JsSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsSymbol")
            .field("description", &self.description)
            .field("key", &self.key)
            .finish()
    }
}

/// A symbol as seen by a script: either the bare primitive or an object
/// wrapper produced by boxing one.
#[derive(Clone, Debug)]
pub enum SymbolValue {
    Primitive(JsSymbol),
    /// Ordinary object whose hidden slot holds `of`
    Boxed { of: JsSymbol, wrapper: JsObjectRef },
}

impl SymbolValue {
    /// Wrap `of` in a fresh object. The wrapper shares `of`'s key and description.
    pub(crate) fn boxed(of: &JsSymbol, prototype: Option<JsObjectRef>) -> Self {
        SymbolValue::Boxed {
            of: of.cheap_clone(),
            wrapper: of.wrap(prototype),
        }
    }

    /// View a script value as a symbol, if it is one (primitive or boxed)
    pub fn from_value(value: &JsValue) -> Option<Self> {
        match value {
            JsValue::Symbol(sym) => Some(SymbolValue::Primitive(sym.cheap_clone())),
            JsValue::Object(obj) => {
                let of = obj.borrow().symbol_data()?.cheap_clone();
                Some(SymbolValue::Boxed {
                    of,
                    wrapper: obj.cheap_clone(),
                })
            }
            _ => None,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, SymbolValue::Primitive(_))
    }

    /// The primitive this value was boxed from (itself when already primitive)
    pub fn unbox(&self) -> &JsSymbol {
        match self {
            SymbolValue::Primitive(sym) => sym,
            SymbolValue::Boxed { of, .. } => of,
        }
    }

    pub fn key(&self) -> &SymbolKey {
        self.unbox().key()
    }

    pub fn description(&self) -> &JsString {
        self.unbox().description()
    }

    pub fn to_text(&self) -> JsString {
        self.unbox().to_text()
    }

    /// `symbol` for primitives; wrappers answer like any other object
    pub fn type_tag(&self) -> TypeTag {
        match self {
            SymbolValue::Primitive(_) => TypeTag::Symbol,
            SymbolValue::Boxed { wrapper, .. } => JsValue::Object(wrapper.cheap_clone()).type_tag(),
        }
    }

    pub fn to_value(&self) -> JsValue {
        match self {
            SymbolValue::Primitive(sym) => JsValue::Symbol(sym.cheap_clone()),
            SymbolValue::Boxed { wrapper, .. } => JsValue::Object(wrapper.cheap_clone()),
        }
    }
}

impl PartialEq for SymbolValue {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for SymbolValue {}

impl Hash for SymbolValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
