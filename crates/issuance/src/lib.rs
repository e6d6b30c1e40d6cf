//! Append-only issuance history backed by a circular doubly-linked list.
//!
//! Timestamps come from an injected [`stockring_core::Clock`]; everything
//! else is deterministic in-memory domain logic.

pub mod log;

pub use log::{IssuanceLog, LogEntry, LogListing};
