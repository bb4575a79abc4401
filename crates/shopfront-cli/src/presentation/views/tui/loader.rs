use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use super::{Palette, centered};

pub struct LoaderView {
    palette: Palette,
}

impl LoaderView {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl Widget for LoaderView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let target = centered(area, 24, 1);
        Paragraph::new(Line::from("⏳ Loading..."))
            .style(
                Style::default()
                    .fg(self.palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .render(target, buf);
    }
}
