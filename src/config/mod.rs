//! Read-only dashboard configuration stored as `config.toml` in the app directory.

use crate::app_dirs;

mod errors;
mod load;
mod source;
mod types;


/// Default filename used to store the dashboard configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub use errors::ConfigError;
pub use load::{config_path, load_from, load_or_default};
pub use source::open_source;
pub use types::{
    ChartSettings, DEFAULT_WORKBOOK_PATH, DashboardConfig, LoggingSettings, SourceSettings,
};

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}
