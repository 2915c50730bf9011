pub mod loading;
pub mod pagination_controls;
pub mod results_panel;
pub mod stat_card;

pub use loading::LoadingPlaceholder;
pub use pagination_controls::{PageLinks, PaginationControls};
pub use results_panel::{load_into, render_panel, settle, PanelState};
pub use stat_card::{CardTone, StatCard};
