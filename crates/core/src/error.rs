//! Domain error model.

use thiserror::Error;

/// Result type used across the warehouse domain.
pub type WarehouseResult<T> = Result<T, WarehouseError>;

/// Domain-level error.
///
/// Keep this focused on deterministic domain failures; every variant is
/// surfaced to the caller immediately and never leaves a structure in a
/// partially mutated state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WarehouseError {
    /// A quantity argument failed validation (must be strictly positive).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Removal was attempted on a registry holding no items.
    #[error("no items in the warehouse")]
    EmptyRegistry,

    /// A full circular scan found no item with the requested name.
    #[error("item not found: {0}")]
    NotFound(String),

    /// The matched item holds less stock than the removal requested.
    #[error("not enough quantity of {name}: requested {requested}, available {available}")]
    InsufficientQuantity {
        name: String,
        requested: u32,
        available: u32,
    },
}

impl WarehouseError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn insufficient(name: impl Into<String>, requested: u32, available: u32) -> Self {
        Self::InsufficientQuantity {
            name: name.into(),
            requested,
            available,
        }
    }
}
