//! TUI View Components
//!
//! Ratatui widgets for the storefront. Each view is a thin wrapper around a
//! view model plus the active `Palette`.
//!
//! ## Design Principles:
//! - Views borrow their view model; no ownership, no logic
//! - Only layout and styling happen here
//! - Every color comes from the `Palette`, so the theme applies everywhere

pub mod card;
pub mod detail;
pub mod error_panel;
pub mod home;
pub mod listing;
pub mod loader;
pub mod modal;
pub mod navbar;
pub mod palette;
pub mod screen;
pub mod status_bar;

pub use card::{ProductCardView, ProductRowView};
pub use detail::DetailView;
pub use error_panel::ErrorPanelView;
pub use home::HomeView;
pub use listing::ListingView;
pub use loader::LoaderView;
pub use modal::ModalView;
pub use navbar::NavbarView;
pub use palette::Palette;
pub use screen::ScreenView;
pub use status_bar::StatusBarView;

use ratatui::layout::Rect;

/// Rectangle of `width` x `height` centered in `area`, clamped to it
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
