//! Dataset source resolution.
//!
//! The bundled dataset is the default. `SFPOPOS_DATA_PATH` points the
//! loader at a JSON file instead; a blank value counts as unset. A
//! non-blank value is used as given, surrounding spaces included.

use crate::store::{PlaceStore, StoreResult};
use std::path::PathBuf;

/// Environment variable overriding the bundled dataset.
pub const DATA_PATH_ENV: &str = "SFPOPOS_DATA_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataSource {
    #[default]
    Bundled,
    File(PathBuf),
}

impl DataSource {
    /// Resolves the source from `SFPOPOS_DATA_PATH`.
    pub fn from_env() -> Self {
        Self::from_override(std::env::var(DATA_PATH_ENV).ok().as_deref())
    }

    /// Resolves the source from an optional path override.
    pub fn from_override(value: Option<&str>) -> Self {
        match value {
            Some(path) if !path.trim().is_empty() => Self::File(PathBuf::from(path)),
            _ => Self::Bundled,
        }
    }

    /// Builds the store. Called once at startup.
    pub fn load(&self) -> StoreResult<PlaceStore> {
        match self {
            Self::Bundled => PlaceStore::bundled(),
            Self::File(path) => PlaceStore::load_from_path(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DataSource;
    use std::path::PathBuf;

    #[test]
    fn blank_override_means_bundled() {
        assert_eq!(DataSource::from_override(None), DataSource::Bundled);
        assert_eq!(DataSource::from_override(Some("  ")), DataSource::Bundled);
        assert_eq!(
            DataSource::from_override(Some("/tmp/places.json")),
            DataSource::File(PathBuf::from("/tmp/places.json"))
        );
    }

    #[test]
    fn non_blank_override_keeps_surrounding_spaces() {
        assert_eq!(
            DataSource::from_override(Some(" /tmp/my places.json ")),
            DataSource::File(PathBuf::from(" /tmp/my places.json "))
        );
    }
}
