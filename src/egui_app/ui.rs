//! Top-level eframe app.

use eframe::egui::{self, RichText};

use crate::dashboard::{DashboardSession, Panel};

use super::chart_view::render_panel_body;
use super::sidebar::render_sidebar;
use super::state::UiState;
use super::style;

/// Smallest window size that keeps the sidebar and chart readable.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(960.0, 640.0);
/// Heading shown above the tabs.
pub const DASHBOARD_TITLE: &str = "Dashboard Kinerja dan Keuangan Pemda";

/// The dashboard window: a filter sidebar and one tab per indicator table.
pub struct DashboardApp {
    session: DashboardSession,
    state: UiState,
    visuals_set: bool,
}

impl DashboardApp {
    pub fn new(session: DashboardSession) -> Self {
        let state = UiState::new(&session);
        Self {
            session,
            state,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_center(&mut self, ui: &mut egui::Ui) {
        let palette = style::PALETTE;
        ui.heading(DASHBOARD_TITLE);
        ui.add_space(6.0);
        ui.horizontal_wrapped(|ui| {
            for panel in Panel::ALL {
                if ui
                    .selectable_label(self.state.active_panel == panel, panel.title())
                    .clicked()
                    && self.state.active_panel != panel
                {
                    self.state.active_panel = panel;
                    self.state.status = None;
                }
            }
        });
        ui.separator();

        let view = self
            .session
            .panel_view(self.state.active_panel, &self.state.selection);
        egui::ScrollArea::vertical()
            .id_salt("panel_scroll")
            .show(ui, |ui| {
                ui.label(RichText::new(view.title).size(18.0).strong());
                ui.add_space(4.0);
                render_panel_body(ui, &mut self.state, &view.body);
                ui.add_space(10.0);
                style::section_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        RichText::new("Interpretasi")
                            .strong()
                            .color(palette.accent),
                    );
                    ui.label(view.interpretation);
                });
            });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        egui::SidePanel::right("filters")
            .resizable(true)
            .default_width(300.0)
            .min_width(240.0)
            .max_width(480.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("filters_scroll")
                    .show(ui, |ui| render_sidebar(ui, &self.session, &mut self.state));
            });
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.set_min_height(ui.available_height());
            self.render_center(ui);
        });
    }
}
