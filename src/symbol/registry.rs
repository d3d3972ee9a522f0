use tracing::trace;

use super::{JsSymbol, SymbolValue, gate};
use crate::prelude::*;
use crate::value::{CheapClone, JsString, JsValue};

/// The `Symbol.for` / `Symbol.keyFor` table of one realm
///
/// At most one symbol exists per textual key. The lookup and the insertion of
/// a new symbol happen under one lock, so racing first uses of the same key
/// from different threads all observe the same symbol.
pub struct SymbolRegistry {
    entries: Mutex<IndexMap<JsString, JsSymbol>>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(index_map_with_capacity(capacity)),
        }
    }

    /// Get the symbol registered under `key`, creating it on first use
    pub fn for_key(&self, key: JsString) -> JsSymbol {
        let mut entries = self.entries.lock();
        entries
            .entry(key)
            .or_insert_with_key(|key| {
                let internal = gate::enter_internal();
                let description = JsValue::String(key.cheap_clone());
                trace!(key = key.as_str(), "registering global symbol");
                gate::construct_internal(&internal, Some(&description), None)
            })
            .cheap_clone()
    }

    /// Reverse lookup by identity. Linear in the number of registered keys;
    /// symbols that never went through [`for_key`](Self::for_key) are never found.
    pub fn key_for(&self, symbol: &SymbolValue) -> Option<JsString> {
        let entries = self.entries.lock();
        entries
            .iter()
            .find(|(_, registered)| registered.key() == symbol.key())
            .map(|(key, _)| key.cheap_clone())
    }

    pub fn get(&self, key: &str) -> Option<JsSymbol> {
        self.entries.lock().get(key).map(CheapClone::cheap_clone)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Default for SymbolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SymbolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolRegistry")
            .field("len", &self.len())
            .finish()
    }
}
