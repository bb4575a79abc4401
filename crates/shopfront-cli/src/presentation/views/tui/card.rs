use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::Palette;
use crate::presentation::formatters::truncate;
use crate::presentation::view_models::ProductCardViewModel;

/// Grid card: title, price, category and one-decimal rating
pub struct ProductCardView<'a> {
    model: &'a ProductCardViewModel,
    palette: Palette,
    selected: bool,
}

impl<'a> ProductCardView<'a> {
    pub const HEIGHT: u16 = 7;
    pub const MIN_WIDTH: u16 = 28;

    pub fn new(model: &'a ProductCardViewModel, palette: Palette, selected: bool) -> Self {
        Self {
            model,
            palette,
            selected,
        }
    }
}

impl<'a> Widget for ProductCardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(p.border(self.selected))
            .style(if self.selected {
                p.surface().bg(p.selection)
            } else {
                p.surface()
            });
        let inner = block.inner(area);
        block.render(area, buf);

        let title_width = (inner.width as usize).saturating_mul(2);
        let lines = vec![
            Line::from(Span::styled(
                truncate(&self.model.title, title_width),
                p.title(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    self.model.price_label.as_str(),
                    Style::default().fg(p.price).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(format!("⭐ {}", self.model.rating_label), Style::default().fg(p.rating)),
            ]),
            Line::from(Span::styled(self.model.category.as_str(), p.muted())),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

/// Compact row: title, category, price, raw rating and review count
pub struct ProductRowView<'a> {
    model: &'a ProductCardViewModel,
    palette: Palette,
    selected: bool,
}

impl<'a> ProductRowView<'a> {
    pub fn new(model: &'a ProductCardViewModel, palette: Palette, selected: bool) -> Self {
        Self {
            model,
            palette,
            selected,
        }
    }
}

impl<'a> Widget for ProductRowView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let base = if self.selected {
            Style::default().fg(p.text).bg(p.selection)
        } else {
            Style::default().fg(p.text)
        };

        let marker = if self.selected { "▶ " } else { "  " };
        let tail = format!(
            "  {}  {}  ⭐ {} ({})",
            self.model.category, self.model.price_label, self.model.rating_raw, self.model.review_count
        );
        let title_width = (area.width as usize)
            .saturating_sub(marker.len() + tail.chars().count() + 1)
            .max(8);

        let line = Line::from(vec![
            Span::styled(marker, Style::default().fg(p.accent)),
            Span::styled(
                truncate(&self.model.title, title_width),
                base.add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", self.model.category), p.muted()),
            Span::styled(format!("  {}", self.model.price_label), Style::default().fg(p.price)),
            Span::styled(
                format!("  ⭐ {} ({})", self.model.rating_raw, self.model.review_count),
                Style::default().fg(p.rating),
            ),
        ]);

        Paragraph::new(line).style(base).render(area, buf);
    }
}
