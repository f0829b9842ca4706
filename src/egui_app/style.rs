use eframe::egui::{
    self, Color32, Margin, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
};

use crate::chart::series_color;

/// Colors the dashboard draws with.
#[derive(Clone, Copy)]
pub struct Palette {
    pub canvas: Color32,
    pub panel: Color32,
    pub widget: Color32,
    pub outline: Color32,
    pub axis: Color32,
    pub grid: Color32,
    pub text: Color32,
    pub text_muted: Color32,
    pub highlight: Color32,
    pub accent: Color32,
}

pub const PALETTE: Palette = Palette {
    canvas: Color32::from_rgb(14, 16, 20),
    panel: Color32::from_rgb(24, 27, 32),
    widget: Color32::from_rgb(40, 44, 52),
    outline: Color32::from_rgb(46, 51, 60),
    axis: Color32::from_rgb(92, 98, 108),
    grid: Color32::from_rgb(34, 38, 44),
    text: Color32::from_rgb(206, 210, 216),
    text_muted: Color32::from_rgb(140, 146, 155),
    highlight: Color32::from_rgb(120, 190, 240),
    accent: Color32::from_rgb(224, 164, 88),
};

/// Dark theme with square widget corners.
pub fn apply_visuals(visuals: &mut Visuals) {
    let p = PALETTE;
    visuals.window_fill = p.canvas;
    visuals.panel_fill = p.panel;
    visuals.extreme_bg_color = p.canvas;
    visuals.override_text_color = Some(p.text);
    visuals.error_fg_color = p.accent;
    visuals.selection.bg_fill = p.outline;
    visuals.selection.stroke = Stroke::new(1.0, p.highlight);
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.menu_corner_radius = CornerRadius::ZERO;
    visuals.popup_shadow = Shadow::NONE;
    let widgets = &mut visuals.widgets;
    for state in [&mut widgets.inactive, &mut widgets.hovered, &mut widgets.active] {
        state.corner_radius = CornerRadius::ZERO;
        state.bg_fill = p.widget;
        state.bg_stroke = Stroke::new(1.0, p.outline);
    }
    widgets.hovered.bg_stroke = Stroke::new(1.0, p.highlight);
}

/// Bordered compartment used for the chart and text blocks.
pub fn section_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(PALETTE.canvas)
        .stroke(Stroke::new(1.0, PALETTE.outline))
        .inner_margin(Margin::symmetric(10, 8))
}

/// Background of a selected-Pemda chip.
pub fn chip_fill() -> Color32 {
    Color32::from_rgb(58, 62, 72)
}

pub fn series_stroke_color(index: usize) -> Color32 {
    let [r, g, b] = series_color(index);
    Color32::from_rgb(r, g, b)
}
