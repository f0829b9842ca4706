use pemda_dash::data::{
    DISTRICT_CONDITION_SHEET, DISTRICT_PERFORMANCE_SHEET, INTERPRETATION_SHEET, MemorySource,
    PROVINCE_CONDITION_SHEET, PROVINCE_PERFORMANCE_SHEET, RATIO_SHEET, RawTable,
};

pub type SheetRows = (&'static str, &'static [&'static str], &'static [&'static [&'static str]]);

pub const RATIOS: SheetRows = (
    RATIO_SHEET,
    &["rasio", "penjelasan"],
    &[
        &["DSCR", "Debt service coverage"],
        &["Tax Ratio", "Pajak daerah terhadap PDRB"],
    ],
);

pub const PROVINCE_CONDITION: SheetRows = (
    PROVINCE_CONDITION_SHEET,
    &["Pemda", "Tahun", "Kluster", "Indikator", "Nilai"],
    &[
        &["Jakarta", "2020", "Kluster 1", "Tax Ratio", "1.2"],
        &["Bali", "2020", "Kluster 2", "Tax Ratio", "0.9"],
        &["Bali", "2019", "Kluster 2", "Tax Ratio", "0.5"],
        &["Jakarta", "2020", "Kluster 1", "DSCR", "3.1"],
    ],
);

pub const PROVINCE_PERFORMANCE: SheetRows = (
    PROVINCE_PERFORMANCE_SHEET,
    &["daerah", "tahun", "indikator", "nilai"],
    &[&["Jakarta", "2021", "DSCR", "2.5"], &["", "", "", ""]],
);

pub const DISTRICT_CONDITION: SheetRows = (
    DISTRICT_CONDITION_SHEET,
    &["Pemda", "Tahun", "Indikator", "Nilai"],
    &[
        &["Kab. Badung", "2020", "Tax Ratio", "2.1"],
        &["Kota Surabaya", "2020", "Tax Ratio", "1.7"],
    ],
);

pub const DISTRICT_PERFORMANCE: SheetRows = (
    DISTRICT_PERFORMANCE_SHEET,
    &["Pemda", "Tahun", "Indikator", "Nilai"],
    &[&["Kab. Badung", "2021", "DSCR", "1,4"]],
);

pub const INTERPRETATIONS: SheetRows = (
    INTERPRETATION_SHEET,
    &["kategori", "penjelasan"],
    &[&["Keu Prov", "Kondisi keuangan provinsi membaik."]],
);

pub const REQUIRED_SHEETS: [SheetRows; 5] = [
    RATIOS,
    PROVINCE_CONDITION,
    PROVINCE_PERFORMANCE,
    DISTRICT_CONDITION,
    DISTRICT_PERFORMANCE,
];

pub fn raw((name, headers, rows): SheetRows) -> RawTable {
    RawTable::from_text_rows(name, headers, rows)
}

/// All five required sheets, without the interpretation sheet.
pub fn required_source() -> MemorySource {
    REQUIRED_SHEETS
        .into_iter()
        .fold(MemorySource::new(), |source, sheet| source.with_sheet(raw(sheet)))
}

/// Every sheet, interpretation included.
pub fn full_source() -> MemorySource {
    required_source().with_sheet(raw(INTERPRETATIONS))
}
