//! Realm configuration

use serde::{Deserialize, Serialize};

use crate::error::JsError;
use crate::prelude::*;

/// Default initial capacity of the `Symbol.for` registry
pub const DEFAULT_REGISTRY_CAPACITY: usize = 16;

/// Options fixed at realm creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RealmOptions {
    /// Label attached to log events of this realm
    pub name: String,
    /// Evaluation mode used by [`Realm::put`](crate::Realm::put)
    pub strict: bool,
    /// Initial capacity of the `Symbol.for` registry, allocated on first use
    pub registry_capacity: usize,
}

impl Default for RealmOptions {
    fn default() -> Self {
        Self {
            name: String::from("main"),
            strict: true,
            registry_capacity: DEFAULT_REGISTRY_CAPACITY,
        }
    }
}

impl RealmOptions {
    /// Parse options from JSON; missing fields take their defaults
    pub fn from_json(source: &str) -> Result<Self, JsError> {
        serde_json::from_str(source).map_err(|e| JsError::config_error(e.to_string()))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_registry_capacity(mut self, capacity: usize) -> Self {
        self.registry_capacity = capacity;
        self
    }
}
