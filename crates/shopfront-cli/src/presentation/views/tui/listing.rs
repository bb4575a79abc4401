use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::{ErrorPanelView, LoaderView, Palette, ProductCardView, ProductRowView};
use crate::presentation::view_models::{ListingBody, ListingScreenViewModel, ProductCardViewModel};

/// Listing page: title, search field, category selector and the products
pub struct ListingView<'a> {
    model: &'a ListingScreenViewModel,
    palette: Palette,
}

impl<'a> ListingView<'a> {
    pub fn new(model: &'a ListingScreenViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }

    fn render_controls(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let chunks =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(area);

        let (search_text, search_style) = if self.model.query.is_empty() && !self.model.search_focused {
            ("Search products...".to_string(), p.muted())
        } else if self.model.search_focused {
            (format!("{}▏", self.model.query), Style::default().fg(p.text))
        } else {
            (self.model.query.clone(), Style::default().fg(p.text))
        };

        Paragraph::new(Span::styled(search_text, search_style))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(p.border(self.model.search_focused))
                    .title(Span::styled(" [/] Search ", p.muted())),
            )
            .render(chunks[0], buf);

        Paragraph::new(Line::from(vec![
            Span::styled("◀ ", p.muted()),
            Span::styled(
                self.model.category_label.as_str(),
                Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▶", p.muted()),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(p.border(false))
                .title(Span::styled(
                    format!(" [c] Category {} ", self.model.category_position),
                    p.muted(),
                )),
        )
        .render(chunks[1], buf);
    }

    fn render_grid(
        &self,
        cards: &[ProductCardViewModel],
        selected: usize,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let columns = (area.width / ProductCardView::MIN_WIDTH).max(1) as usize;
        let card_width = area.width / columns as u16;
        let visible_rows = (area.height / ProductCardView::HEIGHT).max(1) as usize;
        let selected_row = selected / columns;
        let first_row = selected_row.saturating_sub(visible_rows - 1);

        for (index, card) in cards.iter().enumerate().skip(first_row * columns) {
            let row = index / columns - first_row;
            if row >= visible_rows {
                break;
            }
            let col = index % columns;
            let cell = Rect {
                x: area.x + col as u16 * card_width,
                y: area.y + row as u16 * ProductCardView::HEIGHT,
                width: card_width,
                height: ProductCardView::HEIGHT.min(area.height),
            };
            ProductCardView::new(card, self.palette, index == selected).render(cell, buf);
        }
    }

    fn render_rows(
        &self,
        cards: &[ProductCardViewModel],
        selected: usize,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let visible = area.height.max(1) as usize;
        let first = selected.saturating_sub(visible - 1);

        for (offset, (index, card)) in cards.iter().enumerate().skip(first).take(visible).enumerate()
        {
            let row = Rect {
                x: area.x,
                y: area.y + offset as u16,
                width: area.width,
                height: 1,
            };
            ProductRowView::new(card, self.palette, index == selected).render(row, buf);
        }
    }
}

impl<'a> Widget for ListingView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Search + category
            Constraint::Min(3),    // Products
        ])
        .split(area);

        let mut title = vec![Span::styled(
            format!(" {}", self.model.title),
            p.title().fg(p.accent),
        )];
        if let ListingBody::Products {
            refreshing: true, ..
        } = &self.model.body
        {
            title.push(Span::styled("  ⏳ refreshing", p.muted()));
        }
        Paragraph::new(Line::from(title)).render(chunks[0], buf);

        self.render_controls(chunks[1], buf);

        match &self.model.body {
            ListingBody::Loading => LoaderView::new(p).render(chunks[2], buf),
            ListingBody::Failed(panel) => ErrorPanelView::new(panel, p).render(chunks[2], buf),
            ListingBody::Empty { message } => {
                Paragraph::new(message.as_str())
                    .style(p.muted())
                    .alignment(Alignment::Center)
                    .render(super::centered(chunks[2], chunks[2].width, 3), buf);
            }
            ListingBody::Products {
                cards,
                selected,
                compact,
                ..
            } => {
                if *compact {
                    self.render_rows(cards, *selected, chunks[2], buf);
                } else {
                    self.render_grid(cards, *selected, chunks[2], buf);
                }
            }
        }
    }
}
