//! Symbol built-in object implementation

use crate::error::JsError;
use crate::realm::Realm;
use crate::symbol::{SymbolValue, WellKnownSymbols, gate};
use crate::value::{
    CheapClone, JsObjectRef, JsValue, NativeFunction, Property, PropertyKey, create_function,
    create_native, register_method,
};

/// Create the Symbol constructor function object
///
/// Callable as a function; `new Symbol()` goes through [`symbol_construct`].
/// The well-known symbols are installed as frozen, non-enumerable properties.
pub fn create_symbol_constructor(
    symbol_prototype: &JsObjectRef,
    well_known: &WellKnownSymbols,
) -> JsObjectRef {
    let symbol_fn = create_function(NativeFunction {
        name: "Symbol".into(),
        func: symbol_call,
        arity: 0,
        construct: Some(symbol_construct),
    });

    let mut sym = symbol_fn.borrow_mut();

    // Symbol.for(key) and Symbol.keyFor(sym)
    register_method(&mut sym, "for", symbol_for, 1);
    register_method(&mut sym, "keyFor", symbol_key_for, 1);

    sym.define_property(
        PropertyKey::from("prototype"),
        Property::frozen(JsValue::Object(symbol_prototype.cheap_clone())),
    );

    for (which, symbol) in well_known.iter() {
        sym.define_property(
            PropertyKey::from(which.name()),
            Property::frozen(JsValue::Symbol(symbol)),
        );
    }

    drop(sym);
    symbol_fn
}

/// Populate Symbol.prototype
pub fn init_symbol_prototype(
    proto: &JsObjectRef,
    constructor: &JsObjectRef,
    well_known: &WellKnownSymbols,
) {
    let mut p = proto.borrow_mut();

    register_method(&mut p, "toString", symbol_to_string, 0);
    register_method(&mut p, "valueOf", symbol_value_of, 0);

    p.define_property(
        PropertyKey::from("constructor"),
        Property::with_attributes(JsValue::Object(constructor.cheap_clone()), true, false, true),
    );

    // Symbol.prototype.description (getter)
    p.define_property(
        PropertyKey::from("description"),
        Property::getter(create_native("get description", symbol_description, 0)),
    );

    // Symbol.prototype[Symbol.toPrimitive]
    p.define_property(
        PropertyKey::Symbol(well_known.to_primitive.cheap_clone()),
        Property::with_attributes(
            JsValue::Object(create_native("[Symbol.toPrimitive]", symbol_value_of, 1)),
            false,
            false,
            true,
        ),
    );

    // Symbol.prototype[Symbol.toStringTag]
    p.define_property(
        PropertyKey::Symbol(well_known.to_string_tag.cheap_clone()),
        Property::with_attributes(JsValue::from("Symbol"), false, false, true),
    );
}

/// The symbol behind `this`, primitive or boxed
fn this_symbol_value(this: &JsValue) -> Result<SymbolValue, JsError> {
    SymbolValue::from_value(this).ok_or_else(|| JsError::type_error("Symbol expected"))
}

/// Symbol() - create a new unique symbol
pub fn symbol_call(_realm: &Realm, _this: JsValue, args: &[JsValue]) -> Result<JsValue, JsError> {
    Ok(JsValue::Symbol(gate::construct_user(args)))
}

/// new Symbol() - rejected unless the engine itself is constructing
pub fn symbol_construct(
    _realm: &Realm,
    _this: JsValue,
    args: &[JsValue],
) -> Result<JsValue, JsError> {
    gate::construct_new(args).map(JsValue::Symbol)
}

/// Symbol.for(key) - get or create a symbol in the realm's registry
pub fn symbol_for(realm: &Realm, _this: JsValue, args: &[JsValue]) -> Result<JsValue, JsError> {
    let key = args.first().unwrap_or(&JsValue::Undefined);
    Ok(JsValue::Symbol(realm.symbol_for(key)))
}

/// Symbol.keyFor(sym) - get the key for a registered symbol
pub fn symbol_key_for(realm: &Realm, _this: JsValue, args: &[JsValue]) -> Result<JsValue, JsError> {
    let sym = args.first().unwrap_or(&JsValue::Undefined);
    Ok(realm
        .symbol_key_for(sym)?
        .map_or(JsValue::Undefined, JsValue::String))
}

/// Symbol.prototype.toString()
pub fn symbol_to_string(_realm: &Realm, this: JsValue, _args: &[JsValue]) -> Result<JsValue, JsError> {
    Ok(JsValue::String(this_symbol_value(&this)?.to_text()))
}

/// Symbol.prototype.valueOf() and Symbol.prototype[Symbol.toPrimitive]()
pub fn symbol_value_of(_realm: &Realm, this: JsValue, _args: &[JsValue]) -> Result<JsValue, JsError> {
    Ok(JsValue::Symbol(this_symbol_value(&this)?.unbox().cheap_clone()))
}

/// get Symbol.prototype.description
pub fn symbol_description(
    _realm: &Realm,
    this: JsValue,
    _args: &[JsValue],
) -> Result<JsValue, JsError> {
    Ok(JsValue::String(this_symbol_value(&this)?.description().cheap_clone()))
}
