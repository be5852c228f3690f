//! Host-UI bindings for the SFPOPOS core.

pub mod api;
