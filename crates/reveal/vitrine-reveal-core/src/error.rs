use thiserror::Error;

/// Errors raised while building or registering reveal specs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RevealError {
    #[error("invalid threshold '{input}': {reason}")]
    InvalidThreshold { input: String, reason: String },
    #[error("invalid timeline position '{0}'")]
    InvalidPosition(String),
    #[error("invalid width '{value}' declared on '{target}'")]
    InvalidWidth { target: String, value: String },
    #[error("unknown ease '{0}'")]
    UnknownEase(String),
    #[error("scrubbed trigger on '{0}' has no end threshold")]
    MissingEnd(String),
}
