// ABOUTME: Error types for evaluation failures in the NaturalLanguage interpreter

use thiserror::Error;

/// A classified failure raised while parsing or evaluating one statement.
///
/// The four variants correspond directly to the four kinds the driver
/// reports on. `Unknown` is never constructed by this crate's own code; it
/// exists so the driver's catch-all match arm has somewhere to put a
/// failure that doesn't fit the other three.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpError {
    #[error("{0}")]
    Syntax(String),

    #[error("{0}")]
    Type(String),

    #[error("{0}")]
    Runtime(String),

    #[error("{0}")]
    Unknown(String),
}

impl InterpError {
    pub fn syntax(msg: impl Into<String>) -> Self {
        InterpError::Syntax(msg.into())
    }

    pub fn type_error(msg: impl Into<String>) -> Self {
        InterpError::Type(msg.into())
    }

    pub fn runtime(msg: impl Into<String>) -> Self {
        InterpError::Runtime(msg.into())
    }
}
