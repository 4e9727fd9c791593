//! Error type shared by the conversions, the symbolic evaluator and the parsers.
//!
//! The geometric builders themselves are infallible: shape and validity of
//! their inputs is the caller's responsibility.

use thiserror::Error;

/// Common result type for this library
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Mode tag other than the recognized numeric/symbolic ones
    #[error("Unsupported mode: {mode}")]
    UnsupportedMode { mode: String },

    /// A symbolic expression still had a free symbol at evaluation time
    #[error("Unbound symbol: {name}")]
    UnboundSymbol { name: String },

    #[error("Failed to parse {what}: {input:?}")]
    Parse { what: &'static str, input: String },
}

impl Error {
    pub fn unsupported_mode(mode: impl Into<String>) -> Self {
        Self::UnsupportedMode { mode: mode.into() }
    }

    pub fn unbound_symbol(name: impl Into<String>) -> Self {
        Self::UnboundSymbol { name: name.into() }
    }

    pub fn parse(what: &'static str, input: impl Into<String>) -> Self {
        Self::Parse {
            what,
            input: input.into(),
        }
    }
}
