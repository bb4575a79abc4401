//! View models for the interactive storefront.
//!
//! One `ScreenViewModel` is built per frame from the shell state; the TUI
//! views only read it.

use serde::Serialize;

use super::product::{ProductCardViewModel, ProductDetailViewModel};

#[derive(Debug, Clone, Serialize)]
pub struct ScreenViewModel {
    pub dark: bool,
    pub navbar: NavbarViewModel,
    pub page: PageViewModel,
    pub status: StatusBarViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavbarViewModel {
    pub brand: String,
    pub links: Vec<NavLinkViewModel>,
    pub theme_glyph: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavLinkViewModel {
    pub label: String,
    pub key: char,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageViewModel {
    Home(HomeViewModel),
    Listing(ListingScreenViewModel),
    Detail(DetailScreenViewModel),
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeViewModel {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub actions: Vec<HomeActionViewModel>,
    pub features: Vec<FeatureCardViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modal: Option<ModalViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeActionViewModel {
    pub label: String,
    pub primary: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureCardViewModel {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModalViewModel {
    pub title: String,
    pub body: String,
    pub close_hint: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPanelViewModel {
    pub title: String,
    pub message: String,
    pub retry_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingScreenViewModel {
    pub title: String,
    pub query: String,
    pub search_focused: bool,
    pub category_label: String,
    pub category_position: String,
    pub body: ListingBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ListingBody {
    Loading,
    Failed(ErrorPanelViewModel),
    Empty { message: String },
    Products {
        cards: Vec<ProductCardViewModel>,
        selected: usize,
        compact: bool,
        refreshing: bool,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailScreenViewModel {
    pub body: DetailBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DetailBody {
    Loading,
    Failed(ErrorPanelViewModel),
    Ready(ProductDetailViewModel),
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub route: String,
    pub hints: Vec<(String, String)>,
}
