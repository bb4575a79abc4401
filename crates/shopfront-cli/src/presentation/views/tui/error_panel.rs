use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::{Palette, centered};
use crate::presentation::view_models::ErrorPanelViewModel;

pub struct ErrorPanelView<'a> {
    model: &'a ErrorPanelViewModel,
    palette: Palette,
}

impl<'a> ErrorPanelView<'a> {
    pub fn new(model: &'a ErrorPanelViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }
}

impl<'a> Widget for ErrorPanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let target = centered(area, 60, 9);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.error))
            .style(p.surface());

        let lines = vec![
            Line::from("⚠️"),
            Line::from(Span::styled(
                self.model.title.as_str(),
                Style::default().fg(p.error).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(self.model.message.as_str()),
            Line::from(""),
            Line::from(vec![
                Span::styled("[r] ", p.muted()),
                Span::styled(
                    self.model.retry_label.as_str(),
                    Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(target, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_error_panel;
    use crate::presentation::views::tui::test_support::buffer_text;

    #[test]
    fn test_error_panel_shows_message_and_retry() {
        let model = present_error_panel("Failed to fetch products");
        let area = Rect::new(0, 0, 70, 12);
        let mut buf = Buffer::empty(area);

        ErrorPanelView::new(&model, Palette::DARK).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Oops! Something went wrong"));
        assert!(text.contains("Failed to fetch products"));
        assert!(text.contains("Try Again"));
    }
}
