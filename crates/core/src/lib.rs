//! `stockring-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the warehouse
//! structures (no infrastructure concerns).

pub mod clock;
pub mod error;
pub mod handle;
pub mod validate;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{WarehouseError, WarehouseResult};
pub use handle::Handle;
pub use validate::ensure_positive_quantity;
