use std::collections::{BTreeSet, HashSet};

use crate::data::{Dataset, IndicatorRow, IndicatorTable};

/// What the user has picked in the sidebar. Rebuilt on every interaction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub ratio: Option<String>,
    pub entities: BTreeSet<String>,
}

impl Selection {
    pub fn new<I, S>(ratio: Option<&str>, entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ratio: ratio.map(str::to_string),
            entities: entities.into_iter().map(Into::into).collect(),
        }
    }

    /// The selected ratio, if set and not blank.
    pub fn ratio(&self) -> Option<&str> {
        self.ratio.as_deref().filter(|ratio| !ratio.trim().is_empty())
    }

    /// A chart can be drawn once a ratio and at least one entity are chosen.
    pub fn is_complete(&self) -> bool {
        self.ratio().is_some() && !self.entities.is_empty()
    }

    /// Add or remove an entity; returns whether it is now selected.
    pub fn toggle_entity(&mut self, entity: &str) -> bool {
        if self.entities.remove(entity) {
            false
        } else {
            self.entities.insert(entity.to_string())
        }
    }
}

/// Rows of `table` for the selected entities and indicator, in table order.
///
/// An empty entity set or a missing indicator yields no rows; prompting the
/// user to finish the selection is the caller's job.
pub fn filter_rows<'a>(
    table: &'a IndicatorTable,
    entities: &BTreeSet<String>,
    indicator: Option<&str>,
) -> Vec<&'a IndicatorRow> {
    let Some(indicator) = indicator.filter(|value| !value.trim().is_empty()) else {
        return Vec::new();
    };
    if entities.is_empty() {
        return Vec::new();
    }
    table
        .rows()
        .iter()
        .filter(|row| row.indicator == indicator && entities.contains(&row.entity))
        .collect()
}

/// Candidates whose name contains `query`, ignoring case. Order is preserved.
pub fn search_entities<'a, S: AsRef<str>>(candidates: &'a [S], query: &str) -> Vec<&'a str> {
    let needle = query.to_lowercase();
    candidates
        .iter()
        .map(|candidate| candidate.as_ref())
        .filter(|candidate| needle.is_empty() || candidate.to_lowercase().contains(&needle))
        .collect()
}

/// Sorted, deduplicated entity names across every indicator table.
pub fn entity_options(dataset: &Dataset) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names: Vec<String> = dataset
        .indicator_tables()
        .into_iter()
        .flat_map(IndicatorTable::entities)
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect();
    names.sort();
    names
}
