pub mod common;
pub mod preferences;
pub mod product;
pub mod result;
pub mod screen;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use preferences::{FavoriteToggleViewModel, FavoritesViewModel, ThemeViewModel};
pub use product::{
    CategoryEntryViewModel, CategoryListViewModel, ProductCardViewModel, ProductDetailViewModel,
    ProductListViewModel,
};
pub use result::CommandResultViewModel;
pub use screen::{
    DetailBody, DetailScreenViewModel, ErrorPanelViewModel, FeatureCardViewModel,
    HomeActionViewModel, HomeViewModel, ListingBody, ListingScreenViewModel, ModalViewModel,
    NavLinkViewModel, NavbarViewModel, PageViewModel, ScreenViewModel, StatusBarViewModel,
};
