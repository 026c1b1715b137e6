//! Error types for the gainpad plugin.
//!
//! Only the non-realtime entry points (state delivery) return these.
//! The render path absorbs every failure locally.

use thiserror::Error;

use crate::types::ParameterId;

/// Errors that can occur outside the audio callback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluginError {
    /// A state value was delivered but rejected.
    #[error("invalid value for state `{key}`: {reason}")]
    InvalidState {
        /// State key the value was delivered for.
        key: String,
        /// Why the value was rejected.
        reason: &'static str,
    },
    /// A state key that was never declared.
    #[error("unknown state key `{0}`")]
    UnknownState(String),
    /// A parameter id outside the declared set.
    #[error("unknown parameter id {0}")]
    InvalidParameter(ParameterId),
}

impl PluginError {
    /// Shorthand for an empty state value, the only validation failure
    /// the file slot knows about.
    pub fn empty_state(key: &str) -> Self {
        Self::InvalidState {
            key: key.to_owned(),
            reason: "empty value",
        }
    }
}

/// Result type for gainpad operations.
pub type PluginResult<T> = Result<T, PluginError>;
