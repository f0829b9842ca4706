use crate::chart::{ChartOutcome, LabelMode, LineChart, chart_rows};
use crate::data::{Dataset, IndicatorTable};

use super::filter::{Selection, entity_options, filter_rows, search_entities};
use super::lookup::{lookup_description, lookup_interpretation};

/// Prompt shown until a ratio and at least one entity are picked.
pub const INCOMPLETE_SELECTION_MESSAGE: &str =
    "Pilih rasio dan minimal satu Pemda untuk menampilkan grafik.";
/// Shown when the selection matches no rows in a panel's table.
pub const NO_DATA_MESSAGE: &str = "Tidak ada data untuk pilihan ini.";

/// The four dashboard tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Panel {
    #[default]
    ProvinceCondition,
    ProvincePerformance,
    DistrictCondition,
    DistrictPerformance,
}

impl Panel {
    pub const ALL: [Panel; 4] = [
        Panel::ProvinceCondition,
        Panel::ProvincePerformance,
        Panel::DistrictCondition,
        Panel::DistrictPerformance,
    ];

    pub const fn title(self) -> &'static str {
        match self {
            Panel::ProvinceCondition => "Kondisi Keuangan Provinsi",
            Panel::ProvincePerformance => "Kinerja Keuangan Provinsi",
            Panel::DistrictCondition => "Kondisi Keuangan Kabupaten/Kota",
            Panel::DistrictPerformance => "Kinerja Keuangan Kabupaten/Kota",
        }
    }

    /// Category key looked up in the interpretation table.
    pub const fn interpretation_key(self) -> &'static str {
        match self {
            Panel::ProvinceCondition => "Keu Prov",
            Panel::ProvincePerformance => "Kin Prov",
            Panel::DistrictCondition => "Keu Kab",
            Panel::DistrictPerformance => "Kin Kab",
        }
    }

    pub fn table(self, dataset: &Dataset) -> &IndicatorTable {
        match self {
            Panel::ProvinceCondition => &dataset.province_condition,
            Panel::ProvincePerformance => &dataset.province_performance,
            Panel::DistrictCondition => &dataset.district_condition,
            Panel::DistrictPerformance => &dataset.district_performance,
        }
    }
}

/// What a panel shows in place of, or as, its chart.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelBody {
    IncompleteSelection,
    NoData,
    Chart(LineChart),
}

impl PanelBody {
    /// Message to display when there is no chart.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            PanelBody::IncompleteSelection => Some(INCOMPLETE_SELECTION_MESSAGE),
            PanelBody::NoData => Some(NO_DATA_MESSAGE),
            PanelBody::Chart(_) => None,
        }
    }
}

/// Everything needed to draw one tab.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelView<'a> {
    pub title: &'static str,
    pub body: PanelBody,
    pub interpretation: &'a str,
}

/// Loaded tables plus derived state, built once and shared by every view.
#[derive(Clone, Debug)]
pub struct DashboardSession {
    dataset: Dataset,
    entity_options: Vec<String>,
    label_mode: LabelMode,
}

impl DashboardSession {
    pub fn new(dataset: Dataset, label_mode: LabelMode) -> Self {
        let entity_options = entity_options(&dataset);
        tracing::debug!(entities = entity_options.len(), "Dashboard session ready");
        Self {
            dataset,
            entity_options,
            label_mode,
        }
    }

    /// All selectable entity names, sorted.
    pub fn entity_options(&self) -> &[String] {
        &self.entity_options
    }

    pub fn search_entities(&self, query: &str) -> Vec<&str> {
        search_entities(self.entity_options.as_slice(), query)
    }

    pub fn ratio_names(&self) -> Vec<&str> {
        self.dataset.ratios.names()
    }

    /// Initial selection: first ratio in the catalog, no entities.
    pub fn default_selection(&self) -> Selection {
        Selection::new(
            self.ratio_names().first().copied(),
            std::iter::empty::<String>(),
        )
    }

    /// Sidebar description for the selected ratio.
    pub fn ratio_description(&self, selection: &Selection) -> &str {
        lookup_description(&self.dataset.ratios, selection.ratio().unwrap_or_default())
    }

    pub fn chart_outcome(&self, panel: Panel, selection: &Selection) -> ChartOutcome {
        let rows = filter_rows(
            panel.table(&self.dataset),
            &selection.entities,
            selection.ratio(),
        );
        chart_rows(&rows, panel.title(), self.label_mode)
    }

    pub fn panel_view(&self, panel: Panel, selection: &Selection) -> PanelView<'_> {
        let body = if !selection.is_complete() {
            PanelBody::IncompleteSelection
        } else {
            match self.chart_outcome(panel, selection) {
                ChartOutcome::Chart(chart) => PanelBody::Chart(chart),
                ChartOutcome::NoData => PanelBody::NoData,
            }
        };
        PanelView {
            title: panel.title(),
            body,
            interpretation: lookup_interpretation(
                &self.dataset.interpretations,
                panel.interpretation_key(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{
        IndicatorRow, InterpretationEntry, InterpretationTable, OptionalTable, RatioCatalog,
        RatioEntry,
    };

    fn dataset() -> Dataset {
        Dataset {
            ratios: RatioCatalog::new(vec![
                RatioEntry {
                    name: "Tax Ratio".into(),
                    description: "Pajak terhadap PDRB".into(),
                },
                RatioEntry {
                    name: "DSCR".into(),
                    description: String::new(),
                },
            ]),
            province_condition: IndicatorTable::new(
                "keu_prov",
                vec![
                    IndicatorRow::new("Bali", 2020, "Tax Ratio", 0.9),
                    IndicatorRow::new("Bali", 2019, "Tax Ratio", 0.5),
                ],
            ),
            province_performance: IndicatorTable::new("kin_prov", Vec::new()),
            district_condition: IndicatorTable::new(
                "keu_kab",
                vec![IndicatorRow::new("Badung", 2020, "DSCR", 1.4)],
            ),
            district_performance: IndicatorTable::new("kin_kab", Vec::new()),
            interpretations: OptionalTable::Loaded(InterpretationTable::new(vec![
                InterpretationEntry {
                    category: "Keu Prov".into(),
                    explanation: "Kondisi membaik".into(),
                },
            ])),
        }
    }

    #[test]
    fn default_selection_picks_first_ratio() {
        let session = DashboardSession::new(dataset(), LabelMode::Entity);
        let selection = session.default_selection();
        assert_eq!(selection.ratio(), Some("Tax Ratio"));
        assert!(selection.entities.is_empty());
        assert_eq!(session.ratio_description(&selection), "Pajak terhadap PDRB");
        assert_eq!(session.entity_options(), ["Badung", "Bali"]);
    }

    #[test]
    fn incomplete_selection_prompts_on_every_panel() {
        let session = DashboardSession::new(dataset(), LabelMode::Entity);
        let selection = session.default_selection();
        for panel in Panel::ALL {
            let view = session.panel_view(panel, &selection);
            assert_eq!(view.body, PanelBody::IncompleteSelection);
            assert_eq!(view.title, panel.title());
        }
    }

    #[test]
    fn panels_render_chart_or_no_data() {
        let session = DashboardSession::new(dataset(), LabelMode::Entity);
        let selection = Selection::new(Some("Tax Ratio"), ["Bali"]);

        let view = session.panel_view(Panel::ProvinceCondition, &selection);
        let PanelBody::Chart(chart) = view.body else {
            panic!("expected chart");
        };
        assert_eq!(chart.title, "Kondisi Keuangan Provinsi");
        assert_eq!(chart.series[0].points, vec![(2019, 0.5), (2020, 0.9)]);
        assert_eq!(view.interpretation, "Kondisi membaik");

        let view = session.panel_view(Panel::DistrictCondition, &selection);
        assert_eq!(view.body, PanelBody::NoData);
        assert_eq!(view.body.message(), Some(NO_DATA_MESSAGE));
        assert_eq!(
            view.interpretation,
            "Belum ada interpretasi untuk kategori ini."
        );
    }

    #[test]
    fn blank_description_falls_back() {
        let session = DashboardSession::new(dataset(), LabelMode::Entity);
        let selection = Selection::new(Some("DSCR"), ["Badung"]);
        assert_eq!(session.ratio_description(&selection), "-");
        let unset = Selection::default();
        assert_eq!(session.ratio_description(&unset), "-");
    }
}
