//! Local spreadsheet workbooks (`.xlsx`, `.xls`, `.ods`, ...) read via calamine.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{Data, Reader, Sheets, open_workbook_auto};

use super::error::DataError;
use super::source::DataSource;
use super::table::{Cell, RawTable};

/// A workbook file opened read-only.
pub struct WorkbookSource {
    path: PathBuf,
    workbook: Sheets<BufReader<File>>,
}

impl WorkbookSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref().to_path_buf();
        let workbook = open_workbook_auto(&path).map_err(|source| DataError::OpenWorkbook {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, workbook })
    }
}

impl DataSource for WorkbookSource {
    fn describe(&self) -> String {
        format!("workbook {}", self.path.display())
    }

    fn sheet_names(&mut self) -> Result<Vec<String>, DataError> {
        Ok(self.workbook.sheet_names())
    }

    fn read_sheet(&mut self, name: &str) -> Result<RawTable, DataError> {
        let range = self
            .workbook
            .worksheet_range(name)
            .map_err(|err| DataError::ReadSheet {
                sheet: name.to_string(),
                message: err.to_string(),
            })?;
        Ok(RawTable::from_grid(
            name,
            range.rows().map(|row| row.iter().map(cell_from_data).collect()),
        ))
    }
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Int(value) => Cell::Number(*value as f64),
        Data::Float(value) => Cell::Number(*value),
        Data::String(text) | Data::DateTimeIso(text) | Data::DurationIso(text) => {
            Cell::Text(text.clone())
        }
        Data::Bool(value) => Cell::Bool(*value),
        Data::DateTime(value) => Cell::Number(value.as_f64()),
        Data::Error(_) | Data::Empty => Cell::Empty,
    }
}
