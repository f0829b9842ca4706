//! Chart drawing with the egui painter.

use eframe::egui::{self, Align2, FontId, Pos2, Rect, Sense, Shape, Stroke, StrokeKind, Ui};

use crate::chart::{ChartRenderer, ChartScale, LineChart, SvgRenderer, format_tick};
use crate::dashboard::PanelBody;

use super::state::UiState;
use super::style;

const CHART_HEIGHT: f32 = 360.0;
const LEGEND_WIDTH: f32 = 190.0;
const AXIS_GUTTER: f32 = 56.0;
const BOTTOM_GUTTER: f32 = 36.0;
const HOVER_RADIUS: f32 = 8.0;

/// Draws a [`LineChart`] into the current `Ui`.
pub struct PainterRenderer<'u> {
    ui: &'u mut Ui,
    height: f32,
}

impl<'u> PainterRenderer<'u> {
    pub fn new(ui: &'u mut Ui) -> Self {
        Self {
            ui,
            height: CHART_HEIGHT,
        }
    }
}

impl ChartRenderer for PainterRenderer<'_> {
    type Output = egui::Response;

    fn render(&mut self, chart: &LineChart) -> egui::Response {
        let palette = style::PALETTE;
        let desired = egui::vec2(self.ui.available_width(), self.height);
        let (rect, response) = self.ui.allocate_exact_size(desired, Sense::hover());
        let painter = self.ui.painter_at(rect);
        let scale = ChartScale::for_chart(chart);

        let plot = Rect::from_min_max(
            egui::pos2(rect.left() + AXIS_GUTTER, rect.top() + 28.0),
            egui::pos2(
                (rect.right() - LEGEND_WIDTH).max(rect.left() + AXIS_GUTTER + 1.0),
                rect.bottom() - BOTTOM_GUTTER,
            ),
        );
        let to_screen = |x: f64, y: f64| {
            egui::pos2(
                plot.left() + plot.width() * x as f32,
                plot.bottom() - plot.height() * y as f32,
            )
        };
        let small = FontId::proportional(11.0);

        painter.text(
            egui::pos2(plot.left(), rect.top() + 4.0),
            Align2::LEFT_TOP,
            &chart.title,
            FontId::proportional(14.0),
            palette.text,
        );

        let ticks = scale.y_ticks(5);
        for tick in &ticks {
            let y = to_screen(0.0, scale.y_fraction(*tick)).y;
            painter.line_segment(
                [egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)],
                Stroke::new(1.0, palette.grid),
            );
            painter.text(
                egui::pos2(plot.left() - 6.0, y),
                Align2::RIGHT_CENTER,
                format_tick(*tick, &ticks),
                small.clone(),
                palette.text_muted,
            );
        }
        for year in scale.years() {
            let Some(fraction) = scale.x_fraction(*year) else {
                continue;
            };
            let x = to_screen(fraction, 0.0).x;
            painter.text(
                egui::pos2(x, plot.bottom() + 4.0),
                Align2::CENTER_TOP,
                year.to_string(),
                small.clone(),
                palette.text_muted,
            );
        }
        painter.rect_stroke(
            plot,
            0.0,
            Stroke::new(1.0, palette.axis),
            StrokeKind::Inside,
        );
        painter.text(
            egui::pos2(plot.center().x, rect.bottom() - 2.0),
            Align2::CENTER_BOTTOM,
            &chart.x_label,
            small.clone(),
            palette.text_muted,
        );
        painter.text(
            egui::pos2(rect.left() + 2.0, plot.top() - 16.0),
            Align2::LEFT_TOP,
            &chart.y_label,
            small.clone(),
            palette.text_muted,
        );

        let hover = response.hover_pos();
        let mut hovered: Option<(Pos2, String)> = None;
        for (index, series) in chart.series.iter().enumerate() {
            let color = style::series_stroke_color(index);
            let points: Vec<(Pos2, i32, f64)> = series
                .points
                .iter()
                .filter_map(|(year, value)| {
                    let x = scale.x_fraction(*year)?;
                    Some((to_screen(x, scale.y_fraction(*value)), *year, *value))
                })
                .collect();
            if points.len() > 1 {
                painter.add(Shape::line(
                    points.iter().map(|(pos, _, _)| *pos).collect(),
                    Stroke::new(2.0, color),
                ));
            }
            for (pos, year, value) in &points {
                painter.circle_filled(*pos, 3.5, color);
                if let Some(pointer) = hover
                    && pointer.distance(*pos) <= HOVER_RADIUS
                {
                    hovered = Some((*pos, format!("{} · {year}: {value}", series.label)));
                }
            }

            let legend_y = plot.top() + 6.0 + index as f32 * 18.0;
            let legend_x = plot.right() + 14.0;
            painter.line_segment(
                [
                    egui::pos2(legend_x, legend_y),
                    egui::pos2(legend_x + 18.0, legend_y),
                ],
                Stroke::new(2.0, color),
            );
            painter.text(
                egui::pos2(legend_x + 24.0, legend_y),
                Align2::LEFT_CENTER,
                &series.label,
                small.clone(),
                palette.text,
            );
        }
        if let Some((pos, label)) = hovered {
            painter.circle_stroke(pos, 5.5, Stroke::new(1.5, palette.highlight));
            painter.text(
                pos + egui::vec2(8.0, -8.0),
                Align2::LEFT_BOTTOM,
                label,
                small,
                palette.highlight,
            );
        }
        response
    }

    fn no_data(&mut self, message: &str) -> egui::Response {
        let palette = style::PALETTE;
        let desired = egui::vec2(self.ui.available_width(), 48.0);
        let (rect, response) = self.ui.allocate_exact_size(desired, Sense::hover());
        self.ui.painter_at(rect).text(
            rect.left_center(),
            Align2::LEFT_CENTER,
            message,
            FontId::proportional(13.0),
            palette.accent,
        );
        response
    }
}

/// Chart (with its SVG copy action) or the placeholder message for a panel.
pub(super) fn render_panel_body(ui: &mut Ui, state: &mut UiState, body: &PanelBody) {
    match body {
        PanelBody::Chart(chart) => {
            ui.horizontal(|ui| {
                let copy = ui
                    .button("Salin SVG")
                    .on_hover_text("Salin grafik sebagai SVG ke clipboard");
                if copy.clicked() {
                    let svg = SvgRenderer::default().render(chart);
                    ui.ctx().copy_text(svg);
                    tracing::info!(title = %chart.title, "Chart copied as SVG");
                    state.status = Some("Grafik disalin sebagai SVG.".to_string());
                }
                if let Some(status) = &state.status {
                    ui.label(egui::RichText::new(status).color(style::PALETTE.text_muted));
                }
            });
            style::section_frame().show(ui, |ui| {
                PainterRenderer::new(ui).render(chart);
            });
        }
        other => {
            let message = other.message().unwrap_or_default();
            style::section_frame().show(ui, |ui| {
                PainterRenderer::new(ui).no_data(message);
            });
        }
    }
}
