use crate::dashboard::{DashboardSession, Panel, Selection};

/// Mutable UI state; everything the dashboard shows is derived from it each frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub selection: Selection,
    pub search: String,
    pub active_panel: Panel,
    pub status: Option<String>,
}

impl UiState {
    pub fn new(session: &DashboardSession) -> Self {
        Self {
            selection: session.default_selection(),
            ..Self::default()
        }
    }

    pub fn select_ratio(&mut self, ratio: &str) {
        if self.selection.ratio() != Some(ratio) {
            tracing::debug!(ratio, "Ratio selected");
            self.selection.ratio = Some(ratio.to_string());
        }
    }

    pub fn toggle_entity(&mut self, entity: &str) {
        let selected = self.selection.toggle_entity(entity);
        tracing::debug!(entity, selected, "Entity toggled");
    }

    pub fn clear_entities(&mut self) {
        self.selection.entities.clear();
    }

    /// Entities matching the search box, in option order.
    pub fn visible_entities<'a>(&self, session: &'a DashboardSession) -> Vec<&'a str> {
        session.search_entities(&self.search)
    }
}
