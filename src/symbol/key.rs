use crate::prelude::*;
use crate::value::CheapClone;

/// Allocation backing a [`SymbolKey`]. Carries no data; only its address matters.
struct KeyCell;

/// Unforgeable identity token for a symbol.
///
/// Two keys are equal only when they are the same allocation, and the hash is
/// derived from that address. Clones share the allocation, so a registry entry
/// and the symbol values referring to it keep the same identity.
#[derive(Clone)]
pub struct SymbolKey(Arc<KeyCell>);

impl CheapClone for SymbolKey {}

impl SymbolKey {
    /// Mint a key unequal to every other key ever created
    pub fn new() -> Self {
        SymbolKey(Arc::new(KeyCell))
    }

    fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }
}

impl Default for SymbolKey {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for SymbolKey {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for SymbolKey {}

impl Hash for SymbolKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for SymbolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolKey({:#x})", self.addr())
    }
}
