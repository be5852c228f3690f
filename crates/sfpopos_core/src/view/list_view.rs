//! Filterable list view state machine.
//!
//! # Responsibility
//! - Own the transient query string.
//! - Re-derive visible cards on every query change.
//! - Reconcile cards by `PlaceId` so surviving units are reused.
//!
//! # Invariants
//! - `query` starts empty; every `set_query` overwrites it unconditionally.
//! - Visible cards always equal `filter_places(query, store)` in store order.
//! - A card whose key survives a transition keeps its `mount_serial`.
//! - `submit` never changes state.

use crate::model::place::PlaceId;
use crate::search::filter::filter_places;
use crate::store::PlaceStore;
use crate::view::card::PlaceCard;
use log::debug;
use std::collections::HashMap;

/// A card currently mounted in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct MountedCard {
    pub card: PlaceCard,
    /// Assigned once when the card is first mounted; unique per view.
    pub mount_serial: u64,
}

impl MountedCard {
    pub fn key(&self) -> PlaceId {
        self.card.key
    }
}

/// Keys touched by one transition, each list in the order it was visited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderPatch {
    /// Newly created cards, in display order.
    pub mounted: Vec<PlaceId>,
    /// Reused cards, in display order.
    pub retained: Vec<PlaceId>,
    /// Dropped cards, in their previous display order.
    pub unmounted: Vec<PlaceId>,
}

impl RenderPatch {
    /// Returns whether nothing was created or dropped.
    pub fn is_noop(&self) -> bool {
        self.mounted.is_empty() && self.unmounted.is_empty()
    }
}

/// Searchable list over a borrowed store.
#[derive(Debug)]
pub struct ListView<'s> {
    store: &'s PlaceStore,
    query: String,
    cards: Vec<MountedCard>,
    next_serial: u64,
}

impl<'s> ListView<'s> {
    /// Creates the view with an empty query, mounting every place.
    pub fn new(store: &'s PlaceStore) -> Self {
        let mut view = Self {
            store,
            query: String::new(),
            cards: Vec::new(),
            next_serial: 0,
        };
        view.reconcile();
        view
    }

    /// Input-change transition: `query := value`, then re-render.
    pub fn set_query(&mut self, value: impl Into<String>) -> RenderPatch {
        self.query = value.into();
        let patch = self.reconcile();
        debug!(
            "event=query_changed module=list_view query_chars={} visible={} mounted={} retained={} unmounted={}",
            self.query.chars().count(),
            self.cards.len(),
            patch.mounted.len(),
            patch.retained.len(),
            patch.unmounted.len()
        );
        patch
    }

    /// Resets the query to empty.
    pub fn clear(&mut self) -> RenderPatch {
        self.set_query(String::new())
    }

    /// Search-form submit. Filtering is already live, so this only
    /// swallows the submission and leaves the query in place.
    pub fn submit(&mut self) -> RenderPatch {
        debug!(
            "event=search_submit module=list_view status=noop visible={}",
            self.cards.len()
        );
        RenderPatch::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn store(&self) -> &'s PlaceStore {
        self.store
    }

    /// Mounted cards in display order.
    pub fn cards(&self) -> &[MountedCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn reconcile(&mut self) -> RenderPatch {
        let previous_order: Vec<PlaceId> = self.cards.iter().map(MountedCard::key).collect();
        let mut previous: HashMap<PlaceId, MountedCard> = self
            .cards
            .drain(..)
            .map(|mounted| (mounted.key(), mounted))
            .collect();

        let mut patch = RenderPatch::default();
        for place in filter_places(&self.query, self.store) {
            match previous.remove(&place.id) {
                Some(existing) => {
                    patch.retained.push(place.id);
                    self.cards.push(existing);
                }
                None => {
                    patch.mounted.push(place.id);
                    self.cards.push(MountedCard {
                        card: PlaceCard::from_place(place),
                        mount_serial: self.next_serial,
                    });
                    self.next_serial += 1;
                }
            }
        }

        patch.unmounted = previous_order
            .into_iter()
            .filter(|key| previous.contains_key(key))
            .collect();
        patch
    }
}
