//! Symbol values and the machinery that mints them
//!
//! - [`SymbolKey`]: the identity token compared by allocation
//! - [`JsSymbol`] / [`SymbolValue`]: primitive symbols and their boxed wrappers
//! - [`WellKnownSymbols`]: the engine-defined symbols of one realm
//! - [`SymbolRegistry`]: the `Symbol.for` / `Symbol.keyFor` table of one realm
//! - [`gate`]: the only paths that may construct a symbol

pub mod gate;
mod key;
mod registry;
mod value;
mod well_known;

pub use gate::InternalConstruction;
pub use key::SymbolKey;
pub use registry::SymbolRegistry;
pub use value::{JsSymbol, SymbolValue};
pub use well_known::{WellKnownSymbol, WellKnownSymbols};
