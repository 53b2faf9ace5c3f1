use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::tui::app::StatusMessage;
use crate::presentation::tui::theme::{Palette, status_level_to_color};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub(crate) struct StatusBarView<'a> {
    status: Option<&'a StatusMessage>,
    pending: usize,
    frame: usize,
    palette: Palette,
}

impl<'a> StatusBarView<'a> {
    pub fn new(status: Option<&'a StatusMessage>, pending: usize, frame: usize, palette: Palette) -> Self {
        Self {
            status,
            pending,
            frame,
            palette,
        }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(self.palette.border())
            .style(self.palette.base());
        let inner = block.inner(area);
        block.render(area, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(inner);

        let mut spans = Vec::new();
        if self.pending > 0 {
            spans.push(Span::styled(
                format!("{} {} pending ", SPINNER[self.frame % SPINNER.len()], self.pending),
                Style::default().fg(self.palette.accent),
            ));
        }
        if let Some(status) = self.status {
            spans.push(Span::styled(
                status.text.as_str(),
                Style::default().fg(status_level_to_color(status.level)),
            ));
        }
        Paragraph::new(Line::from(spans)).render(left, buf);

        let key = Style::default().fg(ratatui::style::Color::Yellow);
        let help = Line::from(vec![
            Span::styled("[↑↓]", key),
            Span::raw("row "),
            Span::styled("[←→]", key),
            Span::raw("medal "),
            Span::styled("[+/-]", key),
            Span::raw("count "),
            Span::styled("[a]", key),
            Span::raw("dd "),
            Span::styled("[d]", key),
            Span::raw("elete "),
            Span::styled("[r]", key),
            Span::raw("eload "),
            Span::styled("[q]", key),
            Span::raw("uit"),
        ]);
        Paragraph::new(help)
            .alignment(ratatui::layout::Alignment::Right)
            .render(right, buf);
    }
}
