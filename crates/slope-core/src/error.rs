// File: crates/slope-core/src/error.rs
// Summary: Typed errors for option parsing; rendering itself is infallible.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlopeError {
    #[error("invalid color '{0}': expected #rgb or #rrggbb hex")]
    InvalidColor(String),

    #[error("invalid option '{name}': {reason}")]
    InvalidOption { name: String, reason: String },
}
