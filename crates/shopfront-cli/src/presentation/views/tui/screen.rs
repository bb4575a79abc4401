use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Widget},
};

use super::{DetailView, HomeView, ListingView, NavbarView, Palette, StatusBarView};
use crate::presentation::view_models::{PageViewModel, ScreenViewModel};

/// Whole frame: navbar, current page and status bar
pub struct ScreenView<'a> {
    model: &'a ScreenViewModel,
}

impl<'a> ScreenView<'a> {
    pub fn new(model: &'a ScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ScreenView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = Palette::for_dark(self.model.dark);
        Block::default().style(palette.base()).render(area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(2), // Navbar
            Constraint::Min(5),    // Page
            Constraint::Length(2), // Status bar
        ])
        .split(area);

        NavbarView::new(&self.model.navbar, palette).render(chunks[0], buf);

        match &self.model.page {
            PageViewModel::Home(home) => HomeView::new(home, palette).render(chunks[1], buf),
            PageViewModel::Listing(listing) => {
                ListingView::new(listing, palette).render(chunks[1], buf)
            }
            PageViewModel::Detail(detail) => DetailView::new(detail, palette).render(chunks[1], buf),
        }

        StatusBarView::new(&self.model.status, palette).render(chunks[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::{present_home, present_screen};
    use crate::presentation::views::tui::test_support::buffer_text;
    use shopfront_engine::{HomePage, Route};
    use shopfront_types::Theme;

    #[test]
    fn test_screen_frames_page() {
        let page = PageViewModel::Home(present_home(&HomePage::new()));
        let model = present_screen(&Route::Home, Theme::Dark, page, &[("q", "quit")]);
        let area = Rect::new(0, 0, 120, 40);
        let mut buf = Buffer::empty(area);

        ScreenView::new(&model).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("FakeStore Shop"));
        assert!(text.contains("Welcome to FakeStore Shop"));
        assert!(text.contains("[q]quit"));
        assert_eq!(buf[(0u16, 4u16)].bg, Palette::DARK.background);
    }
}
