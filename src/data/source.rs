use std::collections::BTreeMap;

use super::error::DataError;
use super::schema::{ColumnAliases, IndicatorTable, InterpretationTable, RatioCatalog};
use super::table::RawTable;

/// Sheet holding the ratio catalog.
pub const RATIO_SHEET: &str = "rasio";
/// Province financial condition indicators.
pub const PROVINCE_CONDITION_SHEET: &str = "keu_prov";
/// Province financial performance indicators.
pub const PROVINCE_PERFORMANCE_SHEET: &str = "kin_prov";
/// District/city financial condition indicators.
pub const DISTRICT_CONDITION_SHEET: &str = "keu_kab";
/// District/city financial performance indicators.
pub const DISTRICT_PERFORMANCE_SHEET: &str = "kin_kab";
/// Optional narrative interpretations.
pub const INTERPRETATION_SHEET: &str = "Interpretasi";

/// Read-only access to a named set of sheets.
///
/// Implemented by the local workbook reader, the remote spreadsheet client,
/// and an in-memory source for tests.
pub trait DataSource {
    /// Short human-readable description used in logs and errors.
    fn describe(&self) -> String;

    /// Names of all sheets the source exposes.
    fn sheet_names(&mut self) -> Result<Vec<String>, DataError>;

    /// Read one sheet by its exact name.
    fn read_sheet(&mut self, name: &str) -> Result<RawTable, DataError>;
}

/// Outcome of loading a table the dashboard can live without.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionalTable<T> {
    Loaded(T),
    Absent { reason: String },
}

impl<T> OptionalTable<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            OptionalTable::Loaded(table) => Some(table),
            OptionalTable::Absent { .. } => None,
        }
    }
}

/// Every table the dashboard renders from, loaded once per session.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub ratios: RatioCatalog,
    pub province_condition: IndicatorTable,
    pub province_performance: IndicatorTable,
    pub district_condition: IndicatorTable,
    pub district_performance: IndicatorTable,
    pub interpretations: OptionalTable<InterpretationTable>,
}

impl Dataset {
    pub fn indicator_tables(&self) -> [&IndicatorTable; 4] {
        [
            &self.province_condition,
            &self.province_performance,
            &self.district_condition,
            &self.district_performance,
        ]
    }
}

/// Load the full dataset from `source`.
///
/// Any failure on a required sheet is returned as-is. The interpretation sheet
/// is optional: when it is missing or malformed the dataset carries
/// [`OptionalTable::Absent`] instead.
pub fn load_dataset(
    source: &mut dyn DataSource,
    aliases: &ColumnAliases,
) -> Result<Dataset, DataError> {
    let description = source.describe();
    tracing::info!(source = %description, "Loading dashboard tables");
    let available = source.sheet_names()?;

    let mut read = |wanted: &str| -> Result<RawTable, DataError> {
        let name = resolve_sheet_name(&available, wanted).ok_or_else(|| {
            DataError::SheetMissing {
                sheet: wanted.to_string(),
                source_name: description.clone(),
            }
        })?;
        let table = source.read_sheet(name)?;
        tracing::debug!(sheet = name, rows = table.rows.len(), "Read sheet");
        Ok(table)
    };

    let ratios = RatioCatalog::from_raw(&read(RATIO_SHEET)?, aliases)?;
    let province_condition = IndicatorTable::from_raw(&read(PROVINCE_CONDITION_SHEET)?, aliases)?;
    let province_performance =
        IndicatorTable::from_raw(&read(PROVINCE_PERFORMANCE_SHEET)?, aliases)?;
    let district_condition = IndicatorTable::from_raw(&read(DISTRICT_CONDITION_SHEET)?, aliases)?;
    let district_performance =
        IndicatorTable::from_raw(&read(DISTRICT_PERFORMANCE_SHEET)?, aliases)?;
    let interpretations = match read(INTERPRETATION_SHEET)
        .and_then(|raw| InterpretationTable::from_raw(&raw, aliases))
    {
        Ok(table) => OptionalTable::Loaded(table),
        Err(err) => {
            tracing::warn!("Interpretation sheet unavailable, using fallback text: {err}");
            OptionalTable::Absent {
                reason: err.to_string(),
            }
        }
    };

    let dataset = Dataset {
        ratios,
        province_condition,
        province_performance,
        district_condition,
        district_performance,
        interpretations,
    };
    tracing::info!(
        ratios = dataset.ratios.entries().len(),
        rows = dataset.indicator_tables().iter().map(|t| t.len()).sum::<usize>(),
        interpretations = dataset.interpretations.loaded().is_some(),
        "Dashboard tables loaded"
    );
    Ok(dataset)
}

/// Match a wanted sheet name, preferring an exact match over a case-insensitive one.
pub fn resolve_sheet_name<'a>(available: &'a [String], wanted: &str) -> Option<&'a str> {
    available
        .iter()
        .find(|name| name.as_str() == wanted)
        .or_else(|| {
            available
                .iter()
                .find(|name| name.trim().to_lowercase() == wanted.to_lowercase())
        })
        .map(String::as_str)
}

/// Sheets held in memory, keyed by name.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    sheets: BTreeMap<String, RawTable>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, table: RawTable) -> Self {
        self.sheets.insert(table.name.clone(), table);
        self
    }
}

impl DataSource for MemorySource {
    fn describe(&self) -> String {
        format!("in-memory source ({} sheets)", self.sheets.len())
    }

    fn sheet_names(&mut self) -> Result<Vec<String>, DataError> {
        Ok(self.sheets.keys().cloned().collect())
    }

    fn read_sheet(&mut self, name: &str) -> Result<RawTable, DataError> {
        self.sheets
            .get(name)
            .cloned()
            .ok_or_else(|| DataError::SheetMissing {
                sheet: name.to_string(),
                source_name: self.describe(),
            })
    }
}
