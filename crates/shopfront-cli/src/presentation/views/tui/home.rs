use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::{ModalView, Palette};
use crate::presentation::view_models::{FeatureCardViewModel, HomeActionViewModel, HomeViewModel};

/// Hero, call-to-action buttons and the feature cards
pub struct HomeView<'a> {
    model: &'a HomeViewModel,
    palette: Palette,
}

impl<'a> HomeView<'a> {
    pub fn new(model: &'a HomeViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }

    fn render_hero(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.model.title.as_str(),
                Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.model.subtitle.as_str(), p.title())),
            Line::from(""),
            Line::from(Span::styled(self.model.description.as_str(), p.muted())),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_actions(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, action) in self.model.actions.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(action_span(action, self.palette));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_features(&self, area: Rect, buf: &mut Buffer) {
        let count = self.model.features.len().max(1) as u32;
        // Four across when there is room, otherwise two by two
        let (columns, rows) = if area.width >= 100 { (count, 1) } else { (2, count.div_ceil(2)) };

        let row_areas =
            Layout::vertical(vec![Constraint::Ratio(1, rows); rows as usize]).split(area);
        for (r, row_area) in row_areas.iter().enumerate() {
            let cells =
                Layout::horizontal(vec![Constraint::Ratio(1, columns); columns as usize])
                    .split(*row_area);
            for (c, cell) in cells.iter().enumerate() {
                if let Some(feature) = self.model.features.get(r * columns as usize + c) {
                    FeatureCardView {
                        model: feature,
                        palette: self.palette,
                    }
                    .render(*cell, buf);
                }
            }
        }
    }
}

fn action_span(action: &HomeActionViewModel, p: Palette) -> Span<'static> {
    let label = format!(" {} ", action.label);
    let style = match (action.primary, action.selected) {
        (_, true) => Style::default()
            .fg(p.surface)
            .bg(p.accent)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        (false, false) => Style::default().fg(p.text),
    };
    let text = if action.selected {
        format!("▶{}◀", label)
    } else {
        format!("[{}]", label)
    };
    Span::styled(text, style)
}

struct FeatureCardView<'a> {
    model: &'a FeatureCardViewModel,
    palette: Palette,
}

impl<'a> Widget for FeatureCardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(p.border(self.model.selected))
            .style(if self.model.selected {
                p.surface().bg(p.selection)
            } else {
                p.surface()
            });

        Paragraph::new(vec![
            Line::from(self.model.icon.as_str()),
            Line::from(Span::styled(self.model.title.as_str(), p.title())),
            Line::from(""),
            Line::from(Span::styled(self.model.description.as_str(), p.muted())),
        ])
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(area, buf);
    }
}

impl<'a> Widget for HomeView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Length(7), // Hero
            Constraint::Length(2), // Actions
            Constraint::Min(6),    // Features
        ])
        .split(area);

        self.render_hero(chunks[0], buf);
        self.render_actions(chunks[1], buf);
        self.render_features(chunks[2], buf);

        if let Some(modal) = &self.model.modal {
            ModalView::new(modal, self.palette).render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_home;
    use crate::presentation::views::tui::test_support::buffer_text;
    use shopfront_engine::{HomeItem, HomePage};

    fn render(page: &HomePage, width: u16) -> String {
        let model = present_home(page);
        let area = Rect::new(0, 0, width, 30);
        let mut buf = Buffer::empty(area);
        HomeView::new(&model, Palette::LIGHT).render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_home_shows_hero_and_features() {
        let text = render(&HomePage::new(), 120);
        assert!(text.contains("Welcome to FakeStore Shop"));
        assert!(text.contains("View Products"));
        assert!(text.contains("View List"));
        assert!(text.contains("Product Catalog"));
        assert!(text.contains("Dark Mode"));
    }

    #[test]
    fn test_narrow_home_stacks_features() {
        let text = render(&HomePage::new(), 80);
        assert!(text.contains("Search & Filter"));
        assert!(text.contains("Responsive Design"));
    }

    #[test]
    fn test_modal_overlays_page() {
        let mut page = HomePage::new();
        while page.selected() != HomeItem::ResponsiveDesign {
            page.select_next();
        }
        page.activate();

        let text = render(&page, 120);
        assert!(text.contains("Press Esc or Enter to close"));
    }
}
