use eframe::egui::{self, RichText, Ui};

use crate::dashboard::DashboardSession;

use super::state::UiState;
use super::style;

const ENTITY_LIST_HEIGHT: f32 = 280.0;

/// The "Filter Pilihan" column: ratio picker, entity search and multi-select,
/// and the selected ratio's description.
pub(super) fn render_sidebar(ui: &mut Ui, session: &DashboardSession, state: &mut UiState) {
    let palette = style::PALETTE;
    ui.heading("Filter Pilihan");
    ui.add_space(8.0);

    ui.label("Pilih Rasio");
    let current = state.selection.ratio().unwrap_or("-").to_string();
    egui::ComboBox::from_id_salt("ratio_picker")
        .selected_text(current.as_str())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for name in session.ratio_names() {
                if ui.selectable_label(current == name, name).clicked() {
                    state.select_ratio(name);
                }
            }
        });
    ui.add_space(8.0);

    ui.label("Cari Pemda");
    ui.add(
        egui::TextEdit::singleline(&mut state.search)
            .hint_text("Ketik nama Pemda")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        ui.label("Pilih Pemda (bisa lebih dari 1)");
        if !state.selection.entities.is_empty() && ui.small_button("Hapus semua").clicked() {
            state.clear_entities();
        }
    });
    let visible = state.visible_entities(session);
    egui::ScrollArea::vertical()
        .id_salt("entity_list")
        .max_height(ENTITY_LIST_HEIGHT)
        .show(ui, |ui| {
            if visible.is_empty() {
                ui.label(RichText::new("Tidak ada Pemda yang cocok.").color(palette.text_muted));
            }
            for name in visible {
                let mut checked = state.selection.entities.contains(name);
                if ui.checkbox(&mut checked, name).changed() {
                    state.toggle_entity(name);
                }
            }
        });

    if !state.selection.entities.is_empty() {
        ui.add_space(6.0);
        let selected: Vec<String> = state.selection.entities.iter().cloned().collect();
        ui.horizontal_wrapped(|ui| {
            for name in &selected {
                let chip = egui::Button::new(RichText::new(format!("{name} ×")).small())
                    .fill(style::chip_fill());
                if ui.add(chip).on_hover_text("Hapus dari pilihan").clicked() {
                    state.toggle_entity(name);
                }
            }
        });
    }

    ui.add_space(12.0);
    ui.separator();
    ui.label(RichText::new("Deskripsi Rasio").strong());
    ui.label(session.ratio_description(&state.selection));
}
