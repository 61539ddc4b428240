//! Error types for reference cells and the scenario runner

use thiserror::Error;

/// Main error type for refcheck operations.
///
/// Assertion mismatches are not errors: they are recorded as
/// [`Assertion`](crate::runner::Assertion) values and reported softly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefcheckError {
    /// A nil cell was dereferenced
    #[error("Nil dereference: cell of type {type_name} holds no value")]
    NilDereference {
        /// Element type of the cell
        type_name: &'static str,
    },

    /// A scenario name did not match anything in the catalogue
    #[error("Unknown scenario: {name}")]
    UnknownScenario {
        /// The name that was asked for
        name: String,
    },
}

impl RefcheckError {
    /// Build a nil-dereference error for a cell holding `T`.
    pub fn nil_dereference<T>() -> Self {
        RefcheckError::NilDereference {
            type_name: std::any::type_name::<T>(),
        }
    }
}

/// Result type alias for refcheck operations
pub type Result<T> = std::result::Result<T, RefcheckError>;
