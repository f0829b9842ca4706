//! Canonical column schema and the typed tables built from raw sheets.
//!
//! Source sheets disagree on header spelling (`Pemda` vs `daerah`, `Tahun`
//! vs `tahun`, ...). Headers are matched through [`ColumnAliases`] here, at
//! the load boundary, so nothing downstream ever sees a source-specific name.

use std::collections::{BTreeMap, HashSet};

use super::error::DataError;
use super::table::{Cell, RawTable};

/// Canonical column names understood by the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Entity,
    Year,
    Cluster,
    Indicator,
    Value,
    Ratio,
    Description,
    Category,
    Explanation,
}

impl Column {
    pub const ALL: [Column; 9] = [
        Column::Entity,
        Column::Year,
        Column::Cluster,
        Column::Indicator,
        Column::Value,
        Column::Ratio,
        Column::Description,
        Column::Category,
        Column::Explanation,
    ];

    /// Inverse of [`Column::label`].
    pub fn from_label(label: &str) -> Option<Column> {
        let label = label.trim();
        Self::ALL.into_iter().find(|column| column.label() == label)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Column::Entity => "entity",
            Column::Year => "year",
            Column::Cluster => "cluster",
            Column::Indicator => "indicator",
            Column::Value => "value",
            Column::Ratio => "ratio",
            Column::Description => "description",
            Column::Category => "category",
            Column::Explanation => "explanation",
        }
    }

    const fn default_aliases(self) -> &'static [&'static str] {
        match self {
            Column::Entity => &["pemda", "daerah", "entity", "nama pemda"],
            Column::Year => &["tahun", "year"],
            Column::Cluster => &["kluster", "klaster", "cluster"],
            Column::Indicator => &["indikator", "indicator", "rasio"],
            Column::Value => &["nilai", "value"],
            Column::Ratio => &["rasio", "ratio", "nama rasio"],
            Column::Description => &["penjelasan", "deskripsi", "description"],
            Column::Category => &["kategori", "category"],
            Column::Explanation => &["penjelasan", "interpretasi", "explanation"],
        }
    }
}

/// Header aliases per canonical column.
///
/// Deployment-specific aliases take priority over the built-in ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnAliases {
    extra: BTreeMap<Column, Vec<String>>,
}

impl ColumnAliases {
    pub fn with_extra<I, S>(mut self, column: Column, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra
            .entry(column)
            .or_default()
            .extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Index of the header matching `column`, honoring alias priority.
    pub fn resolve(&self, headers: &[String], column: Column) -> Option<usize> {
        let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
        let extra = self.extra.get(&column).into_iter().flatten().map(String::as_str);
        extra
            .chain(column.default_aliases().iter().copied())
            .map(normalize_header)
            .find_map(|alias| normalized.iter().position(|header| *header == alias))
    }

    fn require(&self, table: &RawTable, column: Column) -> Result<usize, DataError> {
        self.resolve(&table.headers, column)
            .ok_or_else(|| DataError::MissingColumn {
                sheet: table.name.clone(),
                column: column.label(),
                headers: table.headers.clone(),
            })
    }
}

/// Lowercase, trim, and collapse runs of whitespace, `_` and `-` into one space.
pub fn normalize_header(header: &str) -> String {
    header
        .split(|ch: char| ch.is_whitespace() || ch == '_' || ch == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[derive(Clone, Debug, PartialEq)]
pub struct RatioEntry {
    pub name: String,
    pub description: String,
}

/// Ratio names and their descriptions, in sheet order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RatioCatalog {
    entries: Vec<RatioEntry>,
}

impl RatioCatalog {
    pub fn new(entries: Vec<RatioEntry>) -> Self {
        Self { entries }
    }

    pub fn from_raw(table: &RawTable, aliases: &ColumnAliases) -> Result<Self, DataError> {
        let ratio = aliases.require(table, Column::Ratio)?;
        let description = aliases.resolve(&table.headers, Column::Description);
        let entries: Vec<RatioEntry> = table
            .rows
            .iter()
            .filter_map(|row| {
                let name = row[ratio].as_text()?;
                let description = description
                    .and_then(|index| row[index].as_text())
                    .unwrap_or_default();
                Some(RatioEntry { name, description })
            })
            .collect();
        warn_duplicates(&table.name, entries.iter().map(|entry| entry.name.clone()));
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RatioEntry] {
        &self.entries
    }

    /// Ratio names in catalog order, first occurrence only.
    pub fn names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|entry| entry.name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One observation of an indicator for a government entity in a year.
#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorRow {
    pub entity: String,
    pub year: i32,
    pub cluster: Option<String>,
    pub indicator: String,
    pub value: f64,
}

impl IndicatorRow {
    pub fn new(entity: &str, year: i32, indicator: &str, value: f64) -> Self {
        Self {
            entity: entity.to_string(),
            year,
            cluster: None,
            indicator: indicator.to_string(),
            value,
        }
    }

    pub fn with_cluster(mut self, cluster: &str) -> Self {
        self.cluster = Some(cluster.to_string());
        self
    }
}

/// Indicator observations of one sheet, in load order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IndicatorTable {
    pub name: String,
    rows: Vec<IndicatorRow>,
}

impl IndicatorTable {
    pub fn new(name: impl Into<String>, rows: Vec<IndicatorRow>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Type a raw indicator sheet.
    ///
    /// Rows missing entity, indicator, year or value are skipped; a year or
    /// value that is present but unparseable fails the whole sheet.
    pub fn from_raw(table: &RawTable, aliases: &ColumnAliases) -> Result<Self, DataError> {
        let entity_col = aliases.require(table, Column::Entity)?;
        let year_col = aliases.require(table, Column::Year)?;
        let indicator_col = aliases.require(table, Column::Indicator)?;
        let value_col = aliases.require(table, Column::Value)?;
        let cluster_col = aliases.resolve(&table.headers, Column::Cluster);

        let mut rows = Vec::with_capacity(table.rows.len());
        let mut skipped = 0usize;
        for (index, raw) in table.rows.iter().enumerate() {
            let (Some(entity), Some(indicator)) =
                (raw[entity_col].as_text(), raw[indicator_col].as_text())
            else {
                skipped += 1;
                continue;
            };
            if raw[year_col].is_blank() || raw[value_col].is_blank() {
                skipped += 1;
                continue;
            }
            rows.push(IndicatorRow {
                entity,
                year: parse_cell(table, index, &raw[year_col], Column::Year, Cell::as_year)?,
                cluster: cluster_col.and_then(|col| raw[col].as_text()),
                indicator,
                value: parse_cell(table, index, &raw[value_col], Column::Value, Cell::as_f64)?,
            });
        }
        if skipped > 0 {
            tracing::debug!(sheet = %table.name, skipped, "Skipped incomplete indicator rows");
        }
        warn_duplicates(
            &table.name,
            rows.iter()
                .map(|row| format!("{} / {} / {}", row.entity, row.year, row.indicator)),
        );
        Ok(Self::new(table.name.clone(), rows))
    }

    pub fn rows(&self) -> &[IndicatorRow] {
        &self.rows
    }

    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.entity.as_str())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterpretationEntry {
    pub category: String,
    pub explanation: String,
}

/// Narrative explanations keyed by panel category.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InterpretationTable {
    entries: Vec<InterpretationEntry>,
}

impl InterpretationTable {
    pub fn new(entries: Vec<InterpretationEntry>) -> Self {
        Self { entries }
    }

    pub fn from_raw(table: &RawTable, aliases: &ColumnAliases) -> Result<Self, DataError> {
        let category = aliases.require(table, Column::Category)?;
        let explanation = aliases.require(table, Column::Explanation)?;
        let entries = table
            .rows
            .iter()
            .filter_map(|row| {
                Some(InterpretationEntry {
                    category: row[category].as_text()?,
                    explanation: row[explanation].as_text().unwrap_or_default(),
                })
            })
            .collect();
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[InterpretationEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_cell<T>(
    table: &RawTable,
    index: usize,
    cell: &Cell,
    column: Column,
    parse: impl Fn(&Cell) -> Option<T>,
) -> Result<T, DataError> {
    parse(cell).ok_or_else(|| DataError::InvalidCell {
        sheet: table.name.clone(),
        row: RawTable::sheet_row(index),
        column: column.label(),
        value: cell.to_string(),
    })
}

fn warn_duplicates(sheet: &str, keys: impl Iterator<Item = String>) {
    let mut seen = HashSet::new();
    let mut duplicates = 0usize;
    let mut example = None;
    for key in keys {
        if !seen.insert(key.clone()) {
            duplicates += 1;
            example.get_or_insert(key);
        }
    }
    if let Some(example) = example {
        tracing::warn!(
            sheet,
            duplicates,
            example = %example,
            "Duplicate keys found; the first occurrence wins for lookups"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_normalization_folds_case_and_separators() {
        assert_eq!(normalize_header("  Nama_Pemda "), "nama pemda");
        assert_eq!(normalize_header("TAHUN"), "tahun");
        assert_eq!(normalize_header("nama -  rasio"), "nama rasio");
    }

    #[test]
    fn column_labels_round_trip() {
        for column in Column::ALL {
            assert_eq!(Column::from_label(column.label()), Some(column));
        }
        assert_eq!(Column::from_label(" year "), Some(Column::Year));
        assert_eq!(Column::from_label("Pemda"), None);
    }

    #[test]
    fn aliases_resolve_variant_headers() {
        let aliases = ColumnAliases::default();
        let headers = vec!["daerah".to_string(), "Tahun".to_string(), "NILAI".to_string()];
        assert_eq!(aliases.resolve(&headers, Column::Entity), Some(0));
        assert_eq!(aliases.resolve(&headers, Column::Year), Some(1));
        assert_eq!(aliases.resolve(&headers, Column::Value), Some(2));
        assert_eq!(aliases.resolve(&headers, Column::Cluster), None);
    }

    #[test]
    fn configured_aliases_take_priority() {
        let aliases = ColumnAliases::default().with_extra(Column::Entity, ["Wilayah"]);
        let headers = vec!["Pemda".to_string(), "wilayah".to_string()];
        assert_eq!(aliases.resolve(&headers, Column::Entity), Some(1));
    }

    #[test]
    fn indicator_table_types_rows_and_skips_incomplete_ones() {
        let raw = RawTable::from_text_rows(
            "keu_prov",
            &["Pemda", "Tahun", "Kluster", "Indikator", "Nilai"],
            &[
                &["Bali", "2020", "A", "Tax Ratio", "0,9"],
                &["", "2020", "", "Tax Ratio", "1.0"],
                &["Jakarta", "2020", "", "Tax Ratio", ""],
                &["Jakarta", "2021", "", "Tax Ratio", "1.4"],
            ],
        );
        let table = IndicatorTable::from_raw(&raw, &ColumnAliases::default()).unwrap();
        assert_eq!(
            table.rows(),
            &[
                IndicatorRow::new("Bali", 2020, "Tax Ratio", 0.9).with_cluster("A"),
                IndicatorRow::new("Jakarta", 2021, "Tax Ratio", 1.4),
            ]
        );
    }

    #[test]
    fn unparseable_value_reports_sheet_row() {
        let raw = RawTable::from_text_rows(
            "kin_kab",
            &["pemda", "tahun", "indikator", "nilai"],
            &[&["Bali", "2020", "DSCR", "1.1"], &["Bali", "2021", "DSCR", "tinggi"]],
        );
        let err = IndicatorTable::from_raw(&raw, &ColumnAliases::default()).unwrap_err();
        match err {
            DataError::InvalidCell {
                sheet, row, column, ..
            } => {
                assert_eq!(sheet, "kin_kab");
                assert_eq!(row, 3);
                assert_eq!(column, "value");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn out_of_range_year_is_invalid() {
        let raw = RawTable::from_text_rows(
            "keu_prov",
            &["pemda", "tahun", "indikator", "nilai"],
            &[&["Bali", "1e12", "DSCR", "1.1"]],
        );
        let err = IndicatorTable::from_raw(&raw, &ColumnAliases::default()).unwrap_err();
        assert!(matches!(
            err,
            DataError::InvalidCell { row: 2, column: "year", .. }
        ));
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let raw = RawTable::from_text_rows("keu_kab", &["Pemda", "Tahun", "Nilai"], &[]);
        let err = IndicatorTable::from_raw(&raw, &ColumnAliases::default()).unwrap_err();
        assert!(matches!(
            err,
            DataError::MissingColumn {
                column: "indicator",
                ..
            }
        ));
    }

    #[test]
    fn ratio_catalog_keeps_duplicates_in_order() {
        let raw = RawTable::from_text_rows(
            "rasio",
            &["rasio", "penjelasan"],
            &[
                &["DSCR", "Debt service coverage"],
                &["Tax Ratio", ""],
                &["DSCR", "Second definition"],
            ],
        );
        let catalog = RatioCatalog::from_raw(&raw, &ColumnAliases::default()).unwrap();
        assert_eq!(catalog.entries().len(), 3);
        assert_eq!(catalog.names(), vec!["DSCR", "Tax Ratio"]);
        assert_eq!(catalog.entries()[1].description, "");
    }

    #[test]
    fn interpretation_table_requires_both_columns() {
        let raw = RawTable::from_text_rows("Interpretasi", &["kategori"], &[&["Keu Prov"]]);
        assert!(InterpretationTable::from_raw(&raw, &ColumnAliases::default()).is_err());
    }
}
