//! Place card projection.

use crate::model::place::{Hours, Place, PlaceId};
use serde::Serialize;

/// Image reference used when a record carries no images.
///
/// Records loaded through `PlaceStore` always have one; this only covers
/// hand-built records handed straight to the renderer.
pub const PLACEHOLDER_IMAGE: &str = "placeholder.jpg";

/// Display unit for one place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceCard {
    /// Reconciliation key; equal to the place id.
    pub key: PlaceId,
    /// Place title.
    pub name: String,
    pub address: String,
    /// `images[0]`, or [`PLACEHOLDER_IMAGE`].
    pub image: String,
    pub hours: Hours,
}

impl PlaceCard {
    pub fn from_place(place: &Place) -> Self {
        Self {
            key: place.id,
            name: place.title.clone(),
            address: place.address.clone(),
            image: place
                .primary_image()
                .unwrap_or(PLACEHOLDER_IMAGE)
                .to_string(),
            hours: place.hours.clone(),
        }
    }
}
