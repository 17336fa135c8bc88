//! Errors reported by the tree.
//!
//! Looking up or removing a value that isn't present is not an error. Those operations return
//! `None` instead.

use thiserror::Error;

/// The ways a mutating tree operation can be refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError<T> {
    /// The value is already stored in the tree. The rejected value is handed back to the caller.
    #[error("value is already present in the tree")]
    DuplicateValue(T),
}

impl<T> TreeError<T> {
    /// Takes back the value that was refused.
    pub fn into_value(self) -> T {
        match self {
            Self::DuplicateValue(value) => value,
        }
    }
}
