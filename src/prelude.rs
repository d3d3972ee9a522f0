//! Prelude module with the shared collection and pointer types.
//!
//! The rest of the crate imports from here so the hasher and the
//! reference-counting flavour are chosen in exactly one place.

// ═══════════════════════════════════════════════════════════════════════════════
// Core types
// ═══════════════════════════════════════════════════════════════════════════════

pub use core::{
    cell::Cell,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

pub use std::{
    boxed::Box,
    format,
    string::{String, ToString},
    sync::{Arc, OnceLock},
    vec,
    vec::Vec,
};

// ═══════════════════════════════════════════════════════════════════════════════
// Locks - realms are shared between threads
// ═══════════════════════════════════════════════════════════════════════════════

pub use parking_lot::{Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

// ═══════════════════════════════════════════════════════════════════════════════
// HashMap - FxHash everywhere, keys are small and trusted
// ═══════════════════════════════════════════════════════════════════════════════

pub use rustc_hash::{FxHashMap, FxHashSet};

// ═══════════════════════════════════════════════════════════════════════════════
// IndexMap - insertion order matters for property enumeration
// ═══════════════════════════════════════════════════════════════════════════════

pub type IndexMap<K, V> =
    indexmap::IndexMap<K, V, core::hash::BuildHasherDefault<rustc_hash::FxHasher>>;

/// Create an empty IndexMap
#[inline]
pub fn index_map_new<K, V>() -> IndexMap<K, V>
where
    K: core::hash::Hash + Eq,
{
    indexmap::IndexMap::with_hasher(Default::default())
}

/// Create an IndexMap with the given capacity
#[inline]
pub fn index_map_with_capacity<K, V>(capacity: usize) -> IndexMap<K, V>
where
    K: core::hash::Hash + Eq,
{
    indexmap::IndexMap::with_capacity_and_hasher(capacity, Default::default())
}
