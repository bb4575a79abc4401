use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::{Palette, centered};
use crate::presentation::view_models::ModalViewModel;

/// Dialog drawn over whatever is below it
pub struct ModalView<'a> {
    model: &'a ModalViewModel,
    palette: Palette,
}

impl<'a> ModalView<'a> {
    pub fn new(model: &'a ModalViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }
}

impl<'a> Widget for ModalView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let target = centered(area, 56, 8);
        Clear.render(target, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(p.border(true))
            .title(Span::styled(format!(" {} ", self.model.title), p.title()))
            .style(p.surface());

        Paragraph::new(vec![
            Line::from(""),
            Line::from(self.model.body.as_str()),
            Line::from(""),
            Line::from(Span::styled(
                self.model.close_hint.as_str(),
                p.muted().add_modifier(Modifier::ITALIC),
            )),
        ])
        .block(block)
        .style(Style::default().fg(p.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(target, buf);
    }
}
