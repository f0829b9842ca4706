//! Remote spreadsheets served by the Google Sheets v4 REST API.
//!
//! Authentication happens out-of-band: the source is handed an
//! [`AccessToken`] that is already valid and sends it as a bearer token.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::http_client;

use super::error::DataError;
use super::source::DataSource;
use super::table::{Cell, RawTable};

/// Public endpoint of the spreadsheet service.
pub const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com";
/// Environment variable consulted for the access token by default.
pub const DEFAULT_TOKEN_ENV: &str = "PEMDA_DASH_SHEETS_TOKEN";

const MAX_METADATA_BYTES: usize = 256 * 1024;
const MAX_SHEET_BYTES: usize = 32 * 1024 * 1024;

/// Identifier of a remote spreadsheet document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpreadsheetId(String);

impl SpreadsheetId {
    /// Accept either a bare document id or a browser URL containing `/d/<id>`.
    pub fn parse(input: &str) -> Result<Self, DataError> {
        let trimmed = input.trim();
        let invalid = || DataError::InvalidAddress(trimmed.to_string());
        if trimmed.contains("://") {
            let url = Url::parse(trimmed).map_err(|_| invalid())?;
            let mut segments = url.path_segments().ok_or_else(invalid)?;
            segments
                .find(|segment| *segment == "d")
                .and_then(|_| segments.next())
                .filter(|id| looks_like_id(id))
                .map(|id| Self(id.to_string()))
                .ok_or_else(invalid)
        } else if looks_like_id(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(invalid())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn looks_like_id(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
}

/// An already-authenticated bearer credential.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Result<Self, DataError> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(DataError::Credential("access token is empty".into()));
        }
        Ok(Self(token))
    }

    pub fn from_env(var: &str) -> Result<Self, DataError> {
        let value = std::env::var(var)
            .map_err(|_| DataError::Credential(format!("environment variable {var} is not set")))?;
        Self::new(value)
    }

    pub fn from_file(path: &Path) -> Result<Self, DataError> {
        let value = std::fs::read_to_string(path).map_err(|err| {
            DataError::Credential(format!("cannot read {}: {err}", path.display()))
        })?;
        Self::new(value)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

#[derive(Deserialize)]
struct SpreadsheetMetadata {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

/// Client for one remote spreadsheet.
#[derive(Debug)]
pub struct SheetsSource {
    api_base: Url,
    spreadsheet: SpreadsheetId,
    token: AccessToken,
}

impl SheetsSource {
    pub fn new(spreadsheet: SpreadsheetId, token: AccessToken) -> Result<Self, DataError> {
        Ok(Self {
            api_base: parse_base(DEFAULT_API_BASE)?,
            spreadsheet,
            token,
        })
    }

    /// Point the client at another host, e.g. a proxy or a local test server.
    pub fn with_api_base(mut self, base: &str) -> Result<Self, DataError> {
        self.api_base = parse_base(base)?;
        Ok(self)
    }

    fn endpoint(&self, tail: &[&str]) -> Result<Url, DataError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| DataError::InvalidAddress(self.api_base.to_string()))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", self.spreadsheet.as_str()])
            .extend(tail);
        Ok(url)
    }

    fn get(&self, url: &Url, max_bytes: usize) -> Result<String, DataError> {
        let response = match http_client::agent()
            .request_url("GET", url)
            .set("Accept", "application/json")
            .set("Authorization", &self.token.bearer())
            .call()
        {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                let body = http_client::read_text(response, MAX_METADATA_BYTES)
                    .unwrap_or_else(|err| err.to_string());
                return Err(map_status(status, body));
            }
            Err(ureq::Error::Transport(err)) => return Err(DataError::Transport(err.to_string())),
        };
        http_client::read_text(response, max_bytes).map_err(|err| DataError::Decode(err.to_string()))
    }
}

fn parse_base(base: &str) -> Result<Url, DataError> {
    Url::parse(base).map_err(|_| DataError::InvalidAddress(base.to_string()))
}

fn map_status(status: u16, body: String) -> DataError {
    match status {
        401 | 403 => DataError::Unauthorized { status },
        _ => DataError::Remote {
            status,
            body: body.trim().to_string(),
        },
    }
}

impl DataSource for SheetsSource {
    fn describe(&self) -> String {
        format!("spreadsheet {}", self.spreadsheet.as_str())
    }

    fn sheet_names(&mut self) -> Result<Vec<String>, DataError> {
        let mut url = self.endpoint(&[])?;
        url.query_pairs_mut()
            .append_pair("fields", "sheets.properties.title");
        let body = self.get(&url, MAX_METADATA_BYTES)?;
        let metadata: SpreadsheetMetadata =
            serde_json::from_str(&body).map_err(|err| DataError::Decode(err.to_string()))?;
        Ok(metadata
            .sheets
            .into_iter()
            .map(|sheet| sheet.properties.title)
            .collect())
    }

    fn read_sheet(&mut self, name: &str) -> Result<RawTable, DataError> {
        let mut url = self.endpoint(&["values", name])?;
        url.query_pairs_mut()
            .append_pair("valueRenderOption", "UNFORMATTED_VALUE")
            .append_pair("majorDimension", "ROWS");
        let body = match self.get(&url, MAX_SHEET_BYTES) {
            Err(DataError::Remote { status: 400 | 404, body }) => {
                return Err(DataError::ReadSheet {
                    sheet: name.to_string(),
                    message: body,
                });
            }
            other => other?,
        };
        let range: ValueRange = serde_json::from_str(&body)
            .map_err(|err| DataError::Decode(format!("sheet '{name}': {err}")))?;
        Ok(RawTable::from_grid(
            name,
            range
                .values
                .into_iter()
                .map(|row| row.into_iter().map(cell_from_json).collect()),
        ))
    }
}

fn cell_from_json(value: serde_json::Value) -> Cell {
    match value {
        serde_json::Value::Null => Cell::Empty,
        serde_json::Value::Bool(flag) => Cell::Bool(flag),
        serde_json::Value::Number(number) => number.as_f64().map_or(Cell::Empty, Cell::Number),
        serde_json::Value::String(text) => Cell::Text(text),
        other => Cell::Text(other.to_string()),
    }
}
