//! Core logic for the SFPOPOS directory.
//! Everything a host UI needs to list and filter San Francisco privately
//! owned public open spaces lives here; hosts only draw the frames.

pub mod config;
pub mod logging;
pub mod model;
pub mod search;
pub mod store;
pub mod view;

pub use config::{DataSource, DATA_PATH_ENV};
pub use logging::{
    default_log_level, init_logging, init_stderr_logging, logging_status, LogSink,
};
pub use model::place::{Hours, Place, PlaceId, PlaceValidationError};
pub use search::filter::{filter_places, place_matches};
pub use search::highlight::highlight_matches;
pub use store::{PlaceStore, StoreError, StoreResult};
pub use view::card::{PlaceCard, PLACEHOLDER_IMAGE};
pub use view::list_view::{ListView, MountedCard, RenderPatch};
pub use view::shell::{Footer, ListFrame, Shell, ShellFrame, TitleBanner};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
