use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::popup_area;
use crate::presentation::tui::form::{AddForm, FormField};
use crate::presentation::tui::theme::{Palette, medal_color};

pub(crate) struct AddFormView<'a> {
    form: &'a AddForm,
    palette: Palette,
}

impl<'a> AddFormView<'a> {
    pub fn new(form: &'a AddForm, palette: Palette) -> Self {
        Self { form, palette }
    }

    fn field_line(&self, field: FormField) -> Line<'a> {
        let (label, label_style) = match field {
            FormField::Name => ("Name".to_string(), Style::default().fg(self.palette.foreground)),
            FormField::Medal(kind) => {
                let medal = kind.descriptor();
                (medal.title(), Style::default().fg(medal_color(medal)))
            }
        };

        let focused = self.form.focused() == field;
        let value_style = if focused {
            Style::default()
                .fg(self.palette.foreground)
                .bg(self.palette.selection)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.foreground)
        };
        let cursor = if focused { "▏" } else { " " };

        Line::from(vec![
            Span::styled(format!("{:>7}: ", label), label_style),
            Span::styled(format!("{:<24}", self.form.value(field)), value_style),
            Span::styled(cursor, Style::default().fg(self.palette.accent)),
        ])
    }
}

impl<'a> Widget for AddFormView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = popup_area(area, 42, 10);
        Clear.render(popup, buf);

        let mut lines: Vec<Line> = FormField::ORDER
            .iter()
            .map(|field| self.field_line(*field))
            .collect();
        lines.push(Line::raw(""));
        match &self.form.error {
            Some(error) => lines.push(Line::styled(error.clone(), Style::default().fg(Color::Red))),
            None => lines.push(Line::styled(
                "[Tab] next  [Enter] save  [Esc] cancel",
                self.palette.muted(),
            )),
        }

        Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .title(" Add country ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.accent))
                    .style(self.palette.base()),
            )
            .render(popup, buf);
    }
}
