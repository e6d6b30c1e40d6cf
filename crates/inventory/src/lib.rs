//! Warehouse item registry backed by a circular singly-linked list.
//!
//! This crate contains the in-memory inventory structure, implemented purely
//! as deterministic domain logic (no IO, no storage).

pub mod registry;

pub use registry::{Item, ItemListing, ItemRegistry};
