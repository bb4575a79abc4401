use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::Palette;
use crate::presentation::view_models::StatusBarViewModel;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
    palette: Palette,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(p.border(false))
            .style(p.surface());
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks =
            Layout::horizontal([Constraint::Length(24), Constraint::Min(10)]).split(inner);

        Paragraph::new(Span::styled(format!(" {}", self.model.route), p.muted()))
            .render(chunks[0], buf);

        let mut spans = Vec::new();
        for (key, label) in &self.model.hints {
            spans.push(Span::styled(format!("[{}]", key), Style::default().fg(p.rating)));
            spans.push(Span::raw(format!("{} ", label)));
        }
        Paragraph::new(Line::from(spans)).render(chunks[1], buf);
    }
}
