use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::chart::LabelMode;
use crate::data::{Column, ColumnAliases, DEFAULT_TOKEN_ENV};

use super::errors::ConfigError;

/// Workbook read when no config file says otherwise.
pub const DEFAULT_WORKBOOK_PATH: &str = "data.xlsx";

/// Settings read from `config.toml`. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub source: SourceSettings,
    /// Extra header aliases, keyed by canonical column name.
    pub columns: BTreeMap<String, Vec<String>>,
    pub chart: ChartSettings,
    pub logging: LoggingSettings,
}

impl DashboardConfig {
    /// Built-in aliases extended with the `[columns]` table.
    pub fn column_aliases(&self) -> Result<ColumnAliases, ConfigError> {
        self.columns
            .iter()
            .try_fold(ColumnAliases::default(), |aliases, (name, extra)| {
                let column = Column::from_label(name).ok_or_else(|| ConfigError::UnknownColumn {
                    name: name.clone(),
                    expected: Column::ALL.map(Column::label).join(", "),
                })?;
                Ok(aliases.with_extra(column, extra.iter().cloned()))
            })
    }
}

/// Where the dashboard tables come from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceSettings {
    /// A local spreadsheet file.
    Workbook {
        #[serde(default = "default_workbook_path")]
        path: PathBuf,
    },
    /// A remote spreadsheet reached with an already-issued access token.
    Sheets {
        /// Document id or browser URL.
        spreadsheet: String,
        #[serde(default = "default_credential_env")]
        credential_env: String,
        /// Read the token from this file instead of the environment.
        #[serde(default)]
        credential_file: Option<PathBuf>,
        #[serde(default)]
        api_base: Option<String>,
    },
}

impl Default for SourceSettings {
    fn default() -> Self {
        SourceSettings::Workbook {
            path: default_workbook_path(),
        }
    }
}

fn default_workbook_path() -> PathBuf {
    PathBuf::from(DEFAULT_WORKBOOK_PATH)
}

fn default_credential_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Append each entity's cluster tag to its legend label.
    pub label_with_cluster: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            label_with_cluster: true,
        }
    }
}

impl ChartSettings {
    pub fn label_mode(&self) -> LabelMode {
        if self.label_with_cluster {
            LabelMode::EntityWithCluster
        } else {
            LabelMode::Entity
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `"debug"`.
    pub level: Option<String>,
}
