//! Chart model and the backends that draw it.

mod model;
pub mod scale;
pub mod svg;

pub use model::{ChartOutcome, LabelMode, LineChart, Series, chart_rows};
pub use scale::{ChartScale, format_tick};
pub use svg::SvgRenderer;

/// A drawing backend for [`LineChart`]s.
pub trait ChartRenderer {
    type Output;

    fn render(&mut self, chart: &LineChart) -> Self::Output;

    /// Placeholder shown instead of a chart.
    fn no_data(&mut self, message: &str) -> Self::Output;
}

/// Dispatch a [`ChartOutcome`] to `renderer`.
pub fn render_outcome<R: ChartRenderer>(
    renderer: &mut R,
    outcome: &ChartOutcome,
    no_data_message: &str,
) -> R::Output {
    match outcome {
        ChartOutcome::Chart(chart) => renderer.render(chart),
        ChartOutcome::NoData => renderer.no_data(no_data_message),
    }
}

const SERIES_COLORS: [[u8; 3]; 10] = [
    [31, 119, 180],
    [255, 127, 14],
    [44, 160, 44],
    [214, 39, 40],
    [148, 103, 189],
    [140, 86, 75],
    [227, 119, 194],
    [127, 127, 127],
    [188, 189, 34],
    [23, 190, 207],
];

/// RGB color of the series at `index`, cycling through a fixed palette.
pub fn series_color(index: usize) -> [u8; 3] {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}
