//! egui presentation of the dashboard.

mod chart_view;
mod sidebar;
mod state;
/// Colors and frames shared by the dashboard widgets.
pub mod style;
/// Application shell.
pub mod ui;

pub use chart_view::PainterRenderer;
pub use state::UiState;
pub use ui::{DASHBOARD_TITLE, DashboardApp, MIN_VIEWPORT_SIZE};
