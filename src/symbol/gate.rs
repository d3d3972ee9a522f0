//! Construction gate
//!
//! Symbols come into existence only through:
//! - `Symbol(desc)` called as a plain function ([`construct_user`])
//! - `Symbol.for(key)` and well-known symbol setup, which run inside an
//!   [`InternalConstruction`] scope ([`construct_internal`], [`construct_new`])
//! - boxing of an existing primitive ([`box_symbol`])
//!
//! `new Symbol(...)` from script code is always rejected. The engine re-enters
//! the same constructor entry point for its own purposes, so the "internally
//! sanctioned" state is a per-thread depth counter held by a scoped guard.

use tracing::trace;

use super::{JsSymbol, SymbolKey, SymbolValue};
use crate::error::JsError;
use crate::prelude::*;
use crate::value::{JsObjectRef, JsValue};

thread_local! {
    static INTERNAL_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Scoped marker flagging the current thread's call chain as an internally
/// sanctioned symbol construction.
///
/// Released on drop, so early returns through `?` and unwinding both clear it.
/// Not `Send`: the marker belongs to the thread that acquired it.
#[must_use = "the marker is released as soon as the guard is dropped"]
pub struct InternalConstruction {
    _not_send: PhantomData<*const ()>,
}

impl InternalConstruction {
    fn enter() -> Self {
        INTERNAL_DEPTH.with(|depth| depth.set(depth.get() + 1));
        InternalConstruction {
            _not_send: PhantomData,
        }
    }
}

impl Drop for InternalConstruction {
    fn drop(&mut self) {
        INTERNAL_DEPTH.with(|depth| {
            debug_assert!(depth.get() > 0, "internal construction marker underflow");
            depth.set(depth.get().saturating_sub(1));
        });
    }
}

impl fmt::Debug for InternalConstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InternalConstruction")
            .field("depth", &INTERNAL_DEPTH.with(Cell::get))
            .finish()
    }
}

/// Flag the current thread as inside an engine-internal construction.
/// Nests; each guard undoes exactly its own increment.
pub fn enter_internal() -> InternalConstruction {
    InternalConstruction::enter()
}

/// Whether the current thread holds an [`InternalConstruction`] marker
pub fn is_internal() -> bool {
    INTERNAL_DEPTH.with(|depth| depth.get() > 0)
}

/// `Symbol(description)` called as a function: always a fresh primitive
pub fn construct_user(args: &[JsValue]) -> JsSymbol {
    JsSymbol::construct(args.first(), None)
}

/// `new Symbol(...)`: only the engine's own re-entrant calls get through.
///
/// Nothing in this crate holds the marker around [`Realm::construct`]; the
/// accepting branch is for embedders that re-enter the constructor from
/// inside an [`enter_internal`] scope.
///
/// [`Realm::construct`]: crate::Realm::construct
pub fn construct_new(args: &[JsValue]) -> Result<JsSymbol, JsError> {
    if !is_internal() {
        trace!("rejected new Symbol()");
        return Err(JsError::NoConstructViaNew);
    }
    Ok(JsSymbol::construct(args.first(), None))
}

/// Engine-internal construction, optionally reusing an existing identity key.
/// The marker argument proves the caller is inside a sanctioned scope.
pub fn construct_internal(
    _marker: &InternalConstruction,
    description: Option<&JsValue>,
    key: Option<SymbolKey>,
) -> JsSymbol {
    debug_assert!(is_internal());
    JsSymbol::construct(description, key)
}

/// Object coercion of a primitive symbol (`Object(sym)`)
pub fn box_symbol(primitive: &JsSymbol, prototype: Option<JsObjectRef>) -> SymbolValue {
    SymbolValue::boxed(primitive, prototype)
}

/// Like [`box_symbol`], handing back only the wrapper object
pub fn box_to_object(primitive: &JsSymbol, prototype: Option<JsObjectRef>) -> JsObjectRef {
    primitive.wrap(prototype)
}
