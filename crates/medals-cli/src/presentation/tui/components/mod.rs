//! Ratatui widgets for the medal board.
//!
//! Each view borrows a view model (or a slice of `AppState`) and only maps it
//! to widgets; no controller state is touched while drawing.

pub mod add_form;
pub mod alert;
pub mod board;
pub mod header;
pub mod status_bar;

pub(crate) use add_form::AddFormView;
pub(crate) use alert::{AlertView, FatalView};
pub(crate) use board::BoardView;
pub(crate) use header::HeaderView;
pub(crate) use status_bar::StatusBarView;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Centered rectangle of at most `width` x `height` inside `area`.
pub(crate) fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    popup
}
