//! Build-time bundled dataset.

/// Raw JSON for the default place list, embedded at compile time.
pub const BUNDLED_DATASET_JSON: &str = include_str!("../../data/sfpopos-data.json");
