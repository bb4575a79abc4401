use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::{ErrorPanelView, LoaderView, Palette};
use crate::presentation::view_models::{DetailBody, DetailScreenViewModel, ProductDetailViewModel};

/// Product detail page
pub struct DetailView<'a> {
    model: &'a DetailScreenViewModel,
    palette: Palette,
}

impl<'a> DetailView<'a> {
    pub fn new(model: &'a DetailScreenViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }

    fn render_product(&self, product: &ProductDetailViewModel, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(p.border(false))
            .style(p.surface());
        let inner = block.inner(area).inner(Margin::new(1, 0));
        block.render(area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(2), // Title
            Constraint::Length(2), // Price, rating, reviews
            Constraint::Length(2), // Category
            Constraint::Min(1),    // Description
        ])
        .split(inner);

        Paragraph::new(Line::from(vec![
            Span::styled(
                product.title.as_str(),
                Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::raw(product.favorite_glyph.as_str()),
        ]))
        .wrap(Wrap { trim: true })
        .render(chunks[0], buf);

        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("💰 {}", product.price_label),
                Style::default().fg(p.price).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(format!("⭐ {}", product.rating_label), Style::default().fg(p.rating)),
            Span::raw("   "),
            Span::styled(format!("👥 {} reviews", product.review_count), p.muted()),
        ]))
        .render(chunks[1], buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Category: ", p.muted()),
            Span::styled(
                format!(" {} ", product.category_label),
                Style::default().fg(p.surface).bg(p.accent),
            ),
        ]))
        .render(chunks[2], buf);

        Paragraph::new(vec![
            Line::from(Span::styled("Description", p.title())),
            Line::from(""),
            Line::from(product.description.as_str()),
        ])
        .wrap(Wrap { trim: true })
        .render(chunks[3], buf);
    }
}

impl<'a> Widget for DetailView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(3)]).split(area);

        Paragraph::new(Line::from(vec![
            Span::styled(" ← Back", Style::default().fg(p.accent)),
            Span::styled(" [b]", p.muted()),
        ]))
        .render(chunks[0], buf);

        match &self.model.body {
            DetailBody::Loading => LoaderView::new(p).render(chunks[1], buf),
            DetailBody::Failed(panel) => ErrorPanelView::new(panel, p).render(chunks[1], buf),
            DetailBody::Ready(product) => self.render_product(product, chunks[1], buf),
        }
    }
}
