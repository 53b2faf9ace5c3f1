use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::Line,
    widgets::{Block, Paragraph},
};

use super::app::AppState;
use super::components::{AddFormView, AlertView, BoardView, FatalView, HeaderView, StatusBarView};
use super::theme::Palette;
use crate::presentation::BoardViewModel;

/// Draw one frame. `loading` is true until the first fetch settles.
pub(crate) fn draw(
    f: &mut Frame,
    state: &mut AppState,
    board: &BoardViewModel,
    loading: bool,
    tick: usize,
) {
    let palette = Palette::for_appearance(state.appearance);
    let area = f.area();
    f.render_widget(Block::default().style(palette.base()), area);

    if let Some(message) = &state.fatal {
        f.render_widget(FatalView::new(message, palette), area);
        return;
    }

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(area);

    f.render_widget(HeaderView::new(board.total, state.appearance, palette), header);

    if loading {
        f.render_widget(
            Paragraph::new(Line::styled("Loading countries...", palette.muted())),
            body,
        );
    } else {
        state.clamp_selection(board.countries.len());
        f.render_stateful_widget(
            BoardView::new(board, state.selected_medal, palette),
            body,
            &mut state.table_state,
        );
    }

    f.render_widget(
        StatusBarView::new(state.status.as_ref(), state.pending, tick, palette),
        footer,
    );

    if let Some(form) = &state.form {
        f.render_widget(AddFormView::new(form, palette), area);
    }

    if let Some(alert) = state.current_alert() {
        f.render_widget(AlertView::new(alert, palette), area);
    }
}
