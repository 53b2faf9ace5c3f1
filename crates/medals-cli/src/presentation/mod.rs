pub mod console;
pub mod result;
pub mod tui;
pub mod view_models;

pub use console::{ConsoleNotifier, ConsoleRenderer};
pub use result::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
pub use tui::TuiRenderer;
pub use view_models::{
    AddResultViewModel, BoardViewModel, ConfigInitViewModel, ConfigViewModel,
    CountryRowViewModel, DeleteResultViewModel, DeleteStatus, MedalCatalogViewModel,
    TotalViewModel,
};
