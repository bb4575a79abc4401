use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::Palette;
use crate::presentation::view_models::NavbarViewModel;

/// Brand on the left; route links and the theme toggle on the right
pub struct NavbarView<'a> {
    model: &'a NavbarViewModel,
    palette: Palette,
}

impl<'a> NavbarView<'a> {
    pub fn new(model: &'a NavbarViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }
}

impl<'a> Widget for NavbarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(p.border(false))
            .style(p.surface());
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(Span::styled(
            format!(" {}", self.model.brand),
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        )))
        .render(inner, buf);

        let mut spans = Vec::new();
        for link in &self.model.links {
            let style = if link.active {
                Style::default()
                    .fg(p.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(p.text)
            };
            spans.push(Span::styled(format!("[{}]", link.key), p.muted()));
            spans.push(Span::styled(format!("{}  ", link.label), style));
        }
        spans.push(Span::styled("[t]", p.muted()));
        spans.push(Span::raw(format!("{} ", self.model.theme_glyph)));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_navbar;
    use crate::presentation::views::tui::test_support::buffer_text;
    use shopfront_engine::Route;
    use shopfront_types::Theme;

    #[test]
    fn test_navbar_renders_brand_and_links() {
        let model = present_navbar(&Route::Products, Theme::Light);
        let area = Rect::new(0, 0, 80, 2);
        let mut buf = Buffer::empty(area);

        NavbarView::new(&model, Palette::LIGHT).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("FakeStore Shop"));
        assert!(text.contains("Home"));
        assert!(text.contains("Products"));
        assert!(text.contains("List"));
    }
}
