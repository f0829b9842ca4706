use crate::data::{InterpretationTable, OptionalTable, RatioCatalog};

/// Shown when a ratio has no description.
pub const MISSING_DESCRIPTION: &str = "-";
/// Shown when the interpretation sheet has no entry for a category.
pub const MISSING_INTERPRETATION: &str = "Belum ada interpretasi untuk kategori ini.";
/// Shown when the interpretation sheet could not be loaded at all.
pub const INTERPRETATIONS_UNAVAILABLE: &str = "Interpretasi belum tersedia.";

/// Description of the first catalog entry named `ratio`.
pub fn lookup_description<'a>(catalog: &'a RatioCatalog, ratio: &str) -> &'a str {
    let key = ratio.trim();
    catalog
        .entries()
        .iter()
        .find(|entry| entry.name == key)
        .map(|entry| entry.description.as_str())
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(MISSING_DESCRIPTION)
}

/// Explanation of the first interpretation entry for `category`.
pub fn lookup_interpretation<'a>(
    interpretations: &'a OptionalTable<InterpretationTable>,
    category: &str,
) -> &'a str {
    let OptionalTable::Loaded(table) = interpretations else {
        return INTERPRETATIONS_UNAVAILABLE;
    };
    let key = category.trim();
    table
        .entries()
        .iter()
        .find(|entry| entry.category == key)
        .map(|entry| entry.explanation.as_str())
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(MISSING_INTERPRETATION)
}
