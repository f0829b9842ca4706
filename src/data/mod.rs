//! Loading the dashboard tables from a workbook or a remote spreadsheet.

mod error;
mod schema;
mod sheets;
mod source;
mod table;
mod workbook;

pub use error::DataError;
pub use schema::{
    Column, ColumnAliases, IndicatorRow, IndicatorTable, InterpretationEntry, InterpretationTable,
    RatioCatalog, RatioEntry, normalize_header,
};
pub use sheets::{AccessToken, DEFAULT_API_BASE, DEFAULT_TOKEN_ENV, SheetsSource, SpreadsheetId};
pub use source::{
    DISTRICT_CONDITION_SHEET, DISTRICT_PERFORMANCE_SHEET, DataSource, Dataset,
    INTERPRETATION_SHEET, MemorySource, OptionalTable, PROVINCE_CONDITION_SHEET,
    PROVINCE_PERFORMANCE_SHEET, RATIO_SHEET, load_dataset, resolve_sheet_name,
};
pub use table::{Cell, RawTable};
pub use workbook::WorkbookSource;
