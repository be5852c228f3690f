//! Place domain model.
//!
//! # Responsibility
//! - Define the canonical POPOS record loaded from the bundled dataset.
//! - Validate the per-record preconditions the renderer depends on.
//!
//! # Invariants
//! - `id` is the only identity used for list keys.
//! - `images[0]` exists and is non-blank for every validated place.
//! - `hours` is opaque to core logic and is never searched.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for one place in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(pub u32);

impl Display for PlaceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PlaceId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Free-form operating hours.
///
/// The dataset mostly carries plain strings, but some sources ship a
/// structured schedule. Both shapes pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Hours {
    Text(String),
    Structured(serde_json::Value),
}

impl Display for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Structured(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Hours {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Record-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceValidationError {
    /// `title` is empty or whitespace only.
    BlankTitle,
    /// `images` has no elements.
    MissingImage,
    /// `images[0]` is empty or whitespace only.
    BlankPrimaryImage,
}

impl Display for PlaceValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "title must not be blank"),
            Self::MissingImage => write!(f, "images must contain at least one entry"),
            Self::BlankPrimaryImage => write!(f, "images[0] must not be blank"),
        }
    }
}

impl Error for PlaceValidationError {}

/// One privately owned public open space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Unique within the store; the list key.
    pub id: PlaceId,
    /// Display name.
    pub title: String,
    /// Postal address.
    pub address: String,
    /// Image references; only the first one is displayed.
    pub images: Vec<String>,
    pub hours: Hours,
}

impl Place {
    /// Builds a place with a single image reference.
    pub fn new(
        id: u32,
        title: impl Into<String>,
        address: impl Into<String>,
        image: impl Into<String>,
        hours: impl Into<Hours>,
    ) -> Self {
        Self {
            id: PlaceId(id),
            title: title.into(),
            address: address.into(),
            images: vec![image.into()],
            hours: hours.into(),
        }
    }

    /// Returns `images[0]`, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Checks the preconditions the card renderer relies on.
    pub fn validate(&self) -> Result<(), PlaceValidationError> {
        if self.title.trim().is_empty() {
            return Err(PlaceValidationError::BlankTitle);
        }
        match self.primary_image() {
            None => Err(PlaceValidationError::MissingImage),
            Some(image) if image.trim().is_empty() => Err(PlaceValidationError::BlankPrimaryImage),
            Some(_) => Ok(()),
        }
    }
}
