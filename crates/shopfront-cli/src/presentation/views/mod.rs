pub mod preferences;
pub mod product;
pub mod tui;

pub use preferences::{FavoriteToggleView, FavoritesView, ThemeView};
pub use product::{CategoryListView, ProductDetailView, ProductListView};
