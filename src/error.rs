//! Error types for the symbol runtime

use thiserror::Error;

use crate::value::{JsString, JsValue};

/// Main error type for the runtime
///
/// All variants except `Config` are script-visible type errors: the caller is
/// expected to surface them to the running script, never to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsError {
    /// `Symbol.keyFor` was handed something that is not a symbol
    #[error("TypeError: Not a Symbol")]
    NotASymbol,

    /// `new Symbol(...)` outside an internally sanctioned construction
    #[error("TypeError: Symbol is not a constructor")]
    NoConstructViaNew,

    /// Strict-mode attempt to add an own property to a primitive symbol
    #[error("TypeError: Cannot create property '{key}' on symbol '{symbol}'")]
    StrictModeAssignToSymbol { key: String, symbol: String },

    #[error("TypeError: {message}")]
    TypeError { message: String },

    /// Rejected realm configuration
    #[error("ConfigError: {message}")]
    Config { message: String },
}

impl JsError {
    pub fn type_error(message: impl Into<String>) -> Self {
        JsError::TypeError {
            message: message.into(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        JsError::Config {
            message: message.into(),
        }
    }

    /// Whether a script would observe this as a `TypeError`
    pub fn is_type_error(&self) -> bool {
        !matches!(self, JsError::Config { .. })
    }

    /// Convert into the value a script `catch` clause would observe
    pub fn to_value(&self) -> JsValue {
        JsValue::String(JsString::from(self.to_string()))
    }
}
