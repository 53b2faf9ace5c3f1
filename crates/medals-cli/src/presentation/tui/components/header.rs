use medals_types::Appearance;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::tui::theme::Palette;

/// Title line with the total-medal badge and the appearance switch.
pub(crate) struct HeaderView {
    total: i64,
    appearance: Appearance,
    palette: Palette,
}

impl HeaderView {
    pub fn new(total: i64, appearance: Appearance, palette: Palette) -> Self {
        Self {
            total,
            appearance,
            palette,
        }
    }
}

impl Widget for HeaderView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(self.palette.border())
            .style(self.palette.base());
        let inner = block.inner(area);
        block.render(area, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(12)]).areas(inner);

        let badge = Style::default()
            .fg(self.palette.background)
            .bg(self.palette.accent)
            .add_modifier(Modifier::BOLD);

        let title = Line::from(vec![
            Span::styled("Olympic Medals ", self.palette.title()),
            Span::styled(format!(" {} ", self.total), badge),
        ]);
        Paragraph::new(title).render(left, buf);

        let switch = match self.appearance {
            Appearance::Dark => "☾ dark  [t]",
            Appearance::Light => "☀ light [t]",
        };
        Paragraph::new(Span::styled(switch, self.palette.muted()))
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}
