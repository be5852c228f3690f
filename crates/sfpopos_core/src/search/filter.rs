//! Case-insensitive substring filter over title and address.
//!
//! # Invariants
//! - Output is an order-preserving subsequence of the store.
//! - An empty query matches every place.
//! - Only `title` and `address` are searched; `hours` and `images` never are.
//! - The store is never mutated and nothing is logged.

use crate::model::place::Place;
use crate::store::PlaceStore;

/// Returns the places whose title or address contains `query`,
/// ignoring case, in store order.
pub fn filter_places<'a>(query: &str, store: &'a PlaceStore) -> Vec<&'a Place> {
    let needle = query.to_lowercase();
    store
        .iter()
        .filter(|place| matches_lowercased(place, &needle))
        .collect()
}

/// Single-record form of [`filter_places`].
pub fn place_matches(place: &Place, query: &str) -> bool {
    matches_lowercased(place, &query.to_lowercase())
}

fn matches_lowercased(place: &Place, needle: &str) -> bool {
    place.title.to_lowercase().contains(needle) || place.address.to_lowercase().contains(needle)
}
