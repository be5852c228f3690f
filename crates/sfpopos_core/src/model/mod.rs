//! Place domain model.
//!
//! # Responsibility
//! - Define the immutable record rendered by the directory list.
//! - Keep record-level validation next to the record shape.
//!
//! # Invariants
//! - Every place is identified by a stable `PlaceId`.
//! - Records are never mutated after the store is built.

pub mod place;
