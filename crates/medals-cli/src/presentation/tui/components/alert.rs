use medals_runtime::Alert;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::popup_area;
use crate::presentation::tui::theme::Palette;

/// Modal alert. Drawn over the board; any key dismisses it.
pub(crate) struct AlertView<'a> {
    alert: &'a Alert,
    palette: Palette,
}

impl<'a> AlertView<'a> {
    pub fn new(alert: &'a Alert, palette: Palette) -> Self {
        Self { alert, palette }
    }
}

impl<'a> Widget for AlertView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = popup_area(area, 56, 8);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(format!(" {} ", self.alert.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .style(self.palette.base());

        Paragraph::new(Text::from(vec![
            Line::raw(self.alert.to_string()),
            Line::raw(""),
            Line::styled("Press any key to continue", self.palette.muted()),
        ]))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(block)
        .render(popup, buf);
    }
}

/// Full-screen error shown when the board could not be loaded at all.
pub(crate) struct FatalView<'a> {
    message: &'a str,
    palette: Palette,
}

impl<'a> FatalView<'a> {
    pub fn new(message: &'a str, palette: Palette) -> Self {
        Self { message, palette }
    }
}

impl<'a> Widget for FatalView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Text::from(vec![
            Line::styled(self.message, Style::default().fg(Color::Red)),
            Line::raw(""),
            Line::styled("Press any key to quit", self.palette.muted()),
        ]))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Error")
                .borders(Borders::ALL)
                .style(self.palette.base()),
        )
        .render(area, buf);
    }
}
