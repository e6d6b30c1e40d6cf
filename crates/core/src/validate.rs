//! Shared argument validation.

use crate::error::{WarehouseError, WarehouseResult};

/// Reject a zero quantity before any mutation takes place.
///
/// Both structures take quantities as `u32`, so the negative case is ruled
/// out by the type; zero is the only runtime rejection left.
pub fn ensure_positive_quantity(quantity: u32) -> WarehouseResult<()> {
    if quantity == 0 {
        return Err(WarehouseError::validation(
            "quantity must be greater than zero",
        ));
    }
    Ok(())
}
