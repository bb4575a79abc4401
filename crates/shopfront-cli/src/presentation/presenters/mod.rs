pub mod preferences;
pub mod product;
pub mod screen;

pub use preferences::{present_favorite_toggle, present_favorites, present_theme};
pub use product::{present_card, present_categories, present_detail, present_product_list};
pub use screen::{
    present_detail_screen, present_error_panel, present_home, present_listing, present_navbar,
    present_screen,
};

pub const EMPTY_LISTING: &str = "No products found. Try a different search term or category.";
pub const FAVORITE_GLYPH: &str = "❤️";
pub const NOT_FAVORITE_GLYPH: &str = "🤍";
