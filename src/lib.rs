//! Library exports for reuse in benchmarks and tests.
/// Application directory helpers.
pub mod app_dirs;
/// Chart model and rendering backends.
pub mod chart;
/// Read-only configuration.
pub mod config;
/// Dashboard logic: lookups, filtering and per-panel views.
pub mod dashboard;
/// Loading source tables.
pub mod data;
/// Shared egui UI modules.
pub mod egui_app;
/// Shared HTTP agent.
pub(crate) mod http_client;
/// Logging setup.
pub mod logging;
