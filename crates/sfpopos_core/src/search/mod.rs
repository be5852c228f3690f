//! Client-side filtering over the place store.
//!
//! # Responsibility
//! - Map a query string to the ordered subset of matching places.
//! - Mark query matches inside display text for terminal front-ends.

pub mod filter;
pub mod highlight;
