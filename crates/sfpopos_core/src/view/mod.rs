//! UI-agnostic view layer.
//!
//! # Responsibility
//! - Project places into display units (`card`).
//! - Own the transient query state and keyed reconciliation (`list_view`).
//! - Compose the full page frame (`shell`).
//!
//! # Invariants
//! - Display units are keyed by `PlaceId` alone.
//! - Every transition completes synchronously inside the caller's turn.

pub mod card;
pub mod list_view;
pub mod shell;
