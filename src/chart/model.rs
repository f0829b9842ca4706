use crate::data::IndicatorRow;

/// How series are labelled in the legend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelMode {
    /// Entity name only.
    Entity,
    /// Entity name followed by its cluster tag when the source has one.
    #[default]
    EntityWithCluster,
}

/// One entity's values over time.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub entity: String,
    /// `(year, value)` pairs, ascending by year.
    pub points: Vec<(i32, f64)>,
}

/// A multi-series line chart, one series per entity.
#[derive(Clone, Debug, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl LineChart {
    /// Group rows by entity (first-appearance order) and sort each group by year.
    ///
    /// Values are carried through untouched.
    pub fn from_rows(title: &str, rows: &[&IndicatorRow], mode: LabelMode) -> Self {
        let mut series: Vec<(Series, Option<&str>)> = Vec::new();
        for row in rows {
            let index = match series.iter().position(|(s, _)| s.entity == row.entity) {
                Some(index) => index,
                None => {
                    series.push((
                        Series {
                            label: String::new(),
                            entity: row.entity.clone(),
                            points: Vec::new(),
                        },
                        None,
                    ));
                    series.len() - 1
                }
            };
            let (entry, cluster) = &mut series[index];
            entry.points.push((row.year, row.value));
            if cluster.is_none() {
                *cluster = row.cluster.as_deref().filter(|tag| !tag.trim().is_empty());
            }
        }
        let series = series
            .into_iter()
            .map(|(mut entry, cluster)| {
                entry.points.sort_by_key(|(year, _)| *year);
                entry.label = match (mode, cluster) {
                    (LabelMode::EntityWithCluster, Some(tag)) => {
                        format!("{} ({})", entry.entity, tag.trim())
                    }
                    _ => entry.entity.clone(),
                };
                entry
            })
            .collect();
        Self {
            title: title.to_string(),
            x_label: "Tahun".to_string(),
            y_label: "Nilai".to_string(),
            series,
        }
    }

    /// Distinct years across all series, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self
            .series
            .iter()
            .flat_map(|series| series.points.iter().map(|(year, _)| *year))
            .collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|series| series.points.len()).sum()
    }
}

/// Result of turning a filtered subset into something drawable.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartOutcome {
    NoData,
    Chart(LineChart),
}

/// Build a chart from a filtered subset, or [`ChartOutcome::NoData`] when empty.
pub fn chart_rows(rows: &[&IndicatorRow], title: &str, mode: LabelMode) -> ChartOutcome {
    if rows.is_empty() {
        return ChartOutcome::NoData;
    }
    ChartOutcome::Chart(LineChart::from_rows(title, rows, mode))
}
