//! Dashboard logic independent of any UI toolkit.

mod filter;
mod lookup;
mod session;

pub use filter::{Selection, entity_options, filter_rows, search_entities};
pub use lookup::{
    INTERPRETATIONS_UNAVAILABLE, MISSING_DESCRIPTION, MISSING_INTERPRETATION, lookup_description,
    lookup_interpretation,
};
pub use session::{
    DashboardSession, INCOMPLETE_SELECTION_MESSAGE, NO_DATA_MESSAGE, Panel, PanelBody, PanelView,
};
