//! Immutable record store for the place directory.
//!
//! # Responsibility
//! - Build the ordered place sequence once, from the bundled dataset or a
//!   caller-provided JSON file.
//! - Reject malformed records at load time instead of at render time.
//!
//! # Invariants
//! - Order is fixed at load time and never changes.
//! - No two records share an id.
//! - Every stored record passes `Place::validate`.
//! - There is no mutation API; callers pass `&PlaceStore` explicitly.

use crate::model::place::{Place, PlaceId, PlaceValidationError};
use log::{error, info};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

mod bundled;

pub use bundled::BUNDLED_DATASET_JSON;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// One record violates a load-time precondition.
    MalformedRecord {
        index: usize,
        id: PlaceId,
        reason: PlaceValidationError,
    },
    /// Two records share the same id.
    DuplicateId {
        id: PlaceId,
        first_index: usize,
        second_index: usize,
    },
    /// Dataset text is not a JSON array of places.
    Parse(serde_json::Error),
    /// Dataset file cannot be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedRecord { index, id, reason } => {
                write!(f, "malformed record at index {index} (id {id}): {reason}")
            }
            Self::DuplicateId {
                id,
                first_index,
                second_index,
            } => write!(
                f,
                "duplicate place id {id} at indexes {first_index} and {second_index}"
            ),
            Self::Parse(err) => write!(f, "invalid dataset json: {err}"),
            Self::Io { path, source } => {
                write!(f, "failed to read dataset `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MalformedRecord { reason, .. } => Some(reason),
            Self::DuplicateId { .. } => None,
            Self::Parse(err) => Some(err),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Ordered, validated, read-only collection of places.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceStore {
    places: Vec<Place>,
    index_by_id: HashMap<PlaceId, usize>,
}

impl PlaceStore {
    /// Validates `places` and freezes them in the given order.
    ///
    /// # Errors
    /// - `MalformedRecord` for the first record failing `Place::validate`.
    /// - `DuplicateId` for the first repeated id.
    pub fn from_places(places: Vec<Place>) -> StoreResult<Self> {
        let mut index_by_id = HashMap::with_capacity(places.len());
        for (index, place) in places.iter().enumerate() {
            place
                .validate()
                .map_err(|reason| StoreError::MalformedRecord {
                    index,
                    id: place.id,
                    reason,
                })?;
            if let Some(first_index) = index_by_id.insert(place.id, index) {
                return Err(StoreError::DuplicateId {
                    id: place.id,
                    first_index,
                    second_index: index,
                });
            }
        }
        Ok(Self {
            places,
            index_by_id,
        })
    }

    /// Parses a JSON array of places and validates it.
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        let places: Vec<Place> = serde_json::from_str(json)?;
        Self::from_places(places)
    }

    /// Loads the dataset embedded at build time.
    pub fn bundled() -> StoreResult<Self> {
        let result = Self::from_json_str(BUNDLED_DATASET_JSON);
        log_load_outcome("bundled", &result);
        result
    }

    /// Loads a dataset from a JSON file on disk.
    pub fn load_from_path(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let result = std::fs::read_to_string(path)
            .map_err(|source| StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|json| Self::from_json_str(&json));
        log_load_outcome("file", &result);
        result
    }

    /// Returns the place with `id`, if present.
    pub fn get(&self, id: PlaceId) -> Option<&Place> {
        self.index_by_id.get(&id).map(|&index| &self.places[index])
    }

    /// All places in load order.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Place> {
        self.places.iter()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl<'a> IntoIterator for &'a PlaceStore {
    type Item = &'a Place;
    type IntoIter = std::slice::Iter<'a, Place>;

    fn into_iter(self) -> Self::IntoIter {
        self.places.iter()
    }
}

fn log_load_outcome(source: &str, result: &StoreResult<PlaceStore>) {
    match result {
        Ok(store) => info!(
            "event=store_load module=store status=ok source={} records={}",
            source,
            store.len()
        ),
        Err(err) => error!(
            "event=store_load module=store status=error source={} error={}",
            source, err
        ),
    }
}
