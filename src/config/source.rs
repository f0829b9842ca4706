use crate::data::{AccessToken, DataError, DataSource, SheetsSource, SpreadsheetId, WorkbookSource};

use super::types::SourceSettings;

/// Open the data source described by `settings`.
///
/// The remote credential is resolved here: from `credential_file` when set,
/// otherwise from the `credential_env` variable.
pub fn open_source(settings: &SourceSettings) -> Result<Box<dyn DataSource>, DataError> {
    match settings {
        SourceSettings::Workbook { path } => {
            tracing::info!(path = %path.display(), "Opening workbook");
            Ok(Box::new(WorkbookSource::open(path)?))
        }
        SourceSettings::Sheets {
            spreadsheet,
            credential_env,
            credential_file,
            api_base,
        } => {
            let id = SpreadsheetId::parse(spreadsheet)?;
            let token = match credential_file {
                Some(path) => AccessToken::from_file(path)?,
                None => AccessToken::from_env(credential_env)?,
            };
            tracing::info!(spreadsheet = id.as_str(), "Opening remote spreadsheet");
            let mut source = SheetsSource::new(id, token)?;
            if let Some(base) = api_base {
                source = source.with_api_base(base)?;
            }
            Ok(Box::new(source))
        }
    }
}
