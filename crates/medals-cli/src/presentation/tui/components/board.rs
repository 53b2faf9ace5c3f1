use medals_types::{MedalKind, MedalType};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::presentation::BoardViewModel;
use crate::presentation::tui::theme::{Palette, medal_color};

/// One row per country in name order. The selected row shows its
/// increment/decrement controls around each count.
pub(crate) struct BoardView<'a> {
    model: &'a BoardViewModel,
    selected_medal: MedalKind,
    palette: Palette,
}

impl<'a> BoardView<'a> {
    pub fn new(model: &'a BoardViewModel, selected_medal: MedalKind, palette: Palette) -> Self {
        Self {
            model,
            selected_medal,
            palette,
        }
    }
}

impl<'a> StatefulWidget for BoardView<'a> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut TableState) {
        let block = Block::default()
            .borders(Borders::NONE)
            .style(self.palette.base());

        if self.model.is_empty() {
            Paragraph::new(Text::from(vec![
                Line::raw(""),
                Line::styled("No countries yet. Press [a] to add one.", self.palette.muted()),
            ]))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
            return;
        }

        let catalog = MedalType::catalog();
        let selected = state.selected();

        let mut header_cells = vec![Cell::from("Country")];
        header_cells.extend(catalog.iter().map(|medal| {
            Cell::from(Line::from(medal.title()).alignment(Alignment::Center)).style(
                Style::default()
                    .fg(medal_color(medal))
                    .add_modifier(Modifier::BOLD),
            )
        }));
        header_cells.push(Cell::from(Line::from("Total").alignment(Alignment::Right)));
        header_cells.push(Cell::from(""));
        let header = Row::new(header_cells)
            .style(self.palette.title())
            .bottom_margin(1);

        let rows = self.model.countries.iter().enumerate().map(|(idx, country)| {
            let is_selected = selected == Some(idx);
            let mut cells = vec![Cell::from(country.name.as_str())];

            for medal in catalog {
                let count = country.count(medal.kind);
                let color = Style::default().fg(medal_color(medal));
                let line = if is_selected {
                    let count_style = if medal.kind == self.selected_medal {
                        color.add_modifier(Modifier::REVERSED | Modifier::BOLD)
                    } else {
                        color
                    };
                    Line::from(vec![
                        Span::styled("− ", self.palette.muted()),
                        Span::styled(format!("{:^3}", count), count_style),
                        Span::styled(" +", self.palette.muted()),
                    ])
                } else {
                    Line::styled(count.to_string(), color)
                };
                cells.push(Cell::from(line.alignment(Alignment::Center)));
            }

            cells.push(Cell::from(
                Line::from(country.total.to_string()).alignment(Alignment::Right),
            ));
            cells.push(Cell::from(if is_selected { " ✕" } else { "" }).style(
                Style::default().fg(ratatui::style::Color::Red),
            ));
            Row::new(cells)
        });

        let mut widths = vec![Constraint::Min(16)];
        widths.extend(catalog.iter().map(|_| Constraint::Length(9)));
        widths.push(Constraint::Length(7));
        widths.push(Constraint::Length(3));

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .row_highlight_style(Style::default().bg(self.palette.selection))
            .highlight_symbol("▶ ");

        StatefulWidget::render(table, area, buf, state);
    }
}
