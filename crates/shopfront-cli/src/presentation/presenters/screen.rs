use shopfront_engine::{
    DetailController, DetailDisplay, HomeItem, HomePage, ListingController, ListingDisplay, Route,
    UNEXPECTED_ERROR,
};
use shopfront_types::{CategoryFilter, Theme};

use super::preferences::theme_toggle_glyph;
use super::product::{present_card, present_detail};
use super::EMPTY_LISTING;
use crate::presentation::view_models::{
    DetailBody, DetailScreenViewModel, ErrorPanelViewModel, FeatureCardViewModel,
    HomeActionViewModel, HomeViewModel, ListingBody, ListingScreenViewModel, ModalViewModel,
    NavLinkViewModel, NavbarViewModel, PageViewModel, ScreenViewModel, StatusBarViewModel,
};

pub const BRAND: &str = "🛍️ FakeStore Shop";

pub fn present_screen(
    route: &Route,
    theme: Theme,
    page: PageViewModel,
    hints: &[(&str, &str)],
) -> ScreenViewModel {
    ScreenViewModel {
        dark: theme.is_dark(),
        navbar: present_navbar(route, theme),
        page,
        status: StatusBarViewModel {
            route: route.path(),
            hints: hints
                .iter()
                .map(|(key, label)| (key.to_string(), label.to_string()))
                .collect(),
        },
    }
}

pub fn present_navbar(route: &Route, theme: Theme) -> NavbarViewModel {
    let links = [
        ("Home", '1', matches!(route, Route::Home)),
        ("Products", '2', matches!(route, Route::Products)),
        ("List", '3', matches!(route, Route::List)),
    ];

    NavbarViewModel {
        brand: BRAND.to_string(),
        links: links
            .into_iter()
            .map(|(label, key, active)| NavLinkViewModel {
                label: label.to_string(),
                key,
                active,
            })
            .collect(),
        theme_glyph: theme_toggle_glyph(theme).to_string(),
    }
}

pub fn present_error_panel(message: &str) -> ErrorPanelViewModel {
    let message = if message.trim().is_empty() {
        UNEXPECTED_ERROR
    } else {
        message
    };

    ErrorPanelViewModel {
        title: "Oops! Something went wrong".to_string(),
        message: message.to_string(),
        retry_label: "Try Again".to_string(),
    }
}

fn home_entry(item: HomeItem) -> (&'static str, &'static str, &'static str) {
    match item {
        HomeItem::ViewProducts => ("", "View Products", ""),
        HomeItem::ViewList => ("", "View List", ""),
        HomeItem::ProductCatalog => (
            "🛍️",
            "Product Catalog",
            "Browse through a wide range of products in grid or list view",
        ),
        HomeItem::SearchAndFilter => (
            "🔍",
            "Search & Filter",
            "Find products quickly with our search and category filter functionality",
        ),
        HomeItem::ResponsiveDesign => (
            "📱",
            "Responsive Design",
            "Enjoy a seamless experience on any device - mobile, tablet, or desktop",
        ),
        HomeItem::DarkMode => (
            "🌙",
            "Dark Mode",
            "Toggle between light and dark themes for comfortable viewing",
        ),
    }
}

pub fn present_home(page: &HomePage) -> HomeViewModel {
    let selected = page.selected();
    let mut actions = Vec::new();
    let mut features = Vec::new();

    for item in HomeItem::ALL {
        let (icon, title, description) = home_entry(item);
        if item.is_feature_card() {
            features.push(FeatureCardViewModel {
                icon: icon.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                selected: item == selected,
            });
        } else {
            actions.push(HomeActionViewModel {
                label: title.to_string(),
                primary: item == HomeItem::ViewProducts,
                selected: item == selected,
            });
        }
    }

    let modal = page.is_modal_open().then(|| ModalViewModel {
        title: "Responsive Design".to_string(),
        body: "Our UI adapts to any device: mobile, tablet, or desktop".to_string(),
        close_hint: "Press Esc or Enter to close".to_string(),
    });

    HomeViewModel {
        title: "Welcome to FakeStore Shop".to_string(),
        subtitle: "Discover amazing products from our curated collection".to_string(),
        description: "Browse through our extensive product catalog, search for your favorites, \
                      and explore detailed information about each item."
            .to_string(),
        actions,
        features,
        modal,
    }
}

pub fn present_listing(
    controller: &ListingController,
    selected: usize,
    search_focused: bool,
) -> ListingScreenViewModel {
    let filter = &controller.filter().category;
    let body = match controller.display() {
        ListingDisplay::Loader => ListingBody::Loading,
        ListingDisplay::Failed(message) => ListingBody::Failed(present_error_panel(message)),
        ListingDisplay::Products { items, .. } if items.is_empty() => ListingBody::Empty {
            message: EMPTY_LISTING.to_string(),
        },
        ListingDisplay::Products { items, refreshing } => ListingBody::Products {
            selected: selected.min(items.len() - 1),
            cards: items.into_iter().map(present_card).collect(),
            compact: controller.mode() == shopfront_engine::ListingMode::Compact,
            refreshing,
        },
    };

    ListingScreenViewModel {
        title: controller.mode().title().to_string(),
        query: controller.filter().query.clone(),
        search_focused,
        category_label: filter.label(),
        category_position: category_position(controller, filter),
        body,
    }
}

/// `n/m` position of the active filter in the menu (`All` first)
fn category_position(controller: &ListingController, filter: &CategoryFilter) -> String {
    let total = controller.categories().len() + 1;
    let index = match filter {
        CategoryFilter::All => 0,
        CategoryFilter::Only(category) => controller
            .categories()
            .iter()
            .position(|c| c == category)
            .map(|i| i + 1)
            .unwrap_or(0),
    };
    format!("{}/{}", index + 1, total)
}

pub fn present_detail_screen(controller: &DetailController, favorite: bool) -> DetailScreenViewModel {
    let body = match controller.display() {
        DetailDisplay::Loader => DetailBody::Loading,
        DetailDisplay::Failed(message) => DetailBody::Failed(present_error_panel(message)),
        DetailDisplay::Ready(product) => DetailBody::Ready(present_detail(product, favorite)),
    };
    DetailScreenViewModel { body }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_engine::{ControllerId, FetchFailure, FetchOutcome, ListingMode};
    use shopfront_testing::fixtures::{categories_of, sample_products};

    fn ready_listing(mode: ListingMode) -> ListingController {
        let mut listing = ListingController::new(ControllerId::new(1), mode);
        let ticket = listing.mount();
        let products = sample_products();
        let categories = categories_of(&products);
        listing.apply(
            &ticket,
            Ok(FetchOutcome::Catalog {
                products,
                categories,
            }),
        );
        listing
    }

    #[test]
    fn test_navbar_marks_active_route() {
        let navbar = present_navbar(&Route::List, Theme::Dark);
        let active: Vec<&str> = navbar
            .links
            .iter()
            .filter(|l| l.active)
            .map(|l| l.label.as_str())
            .collect();

        assert_eq!(active, vec!["List"]);
        assert_eq!(navbar.theme_glyph, "☀️");
        assert_eq!(navbar.brand, "🛍️ FakeStore Shop");
    }

    #[test]
    fn test_detail_route_has_no_active_link() {
        let navbar = present_navbar(&Route::Detail("1".to_string()), Theme::Light);
        assert!(navbar.links.iter().all(|l| !l.active));
        assert_eq!(navbar.theme_glyph, "🌙");
    }

    #[test]
    fn test_error_panel_falls_back_on_empty_message() {
        let panel = present_error_panel("  ");
        assert_eq!(panel.message, "An unexpected error occurred");
        assert_eq!(panel.title, "Oops! Something went wrong");
        assert_eq!(panel.retry_label, "Try Again");
    }

    #[test]
    fn test_listing_search_without_matches_is_empty_state() {
        let mut listing = ready_listing(ListingMode::Grid);
        listing.set_query("no such thing");

        let vm = present_listing(&listing, 0, true);
        match vm.body {
            ListingBody::Empty { message } => assert_eq!(message, EMPTY_LISTING),
            other => panic!("expected empty state, got {:?}", other),
        }
        assert!(vm.search_focused);
        assert_eq!(vm.category_position, "1/4");
    }

    #[test]
    fn test_listing_clamps_selection() {
        let listing = ready_listing(ListingMode::Compact);
        let vm = present_listing(&listing, 99, false);

        match vm.body {
            ListingBody::Products {
                cards,
                selected,
                compact,
                refreshing,
            } => {
                assert_eq!(selected, cards.len() - 1);
                assert!(compact);
                assert!(!refreshing);
            }
            other => panic!("expected products, got {:?}", other),
        }
        assert_eq!(vm.title, "Product List");
    }

    #[test]
    fn test_failed_listing_shows_error_panel() {
        let mut listing = ListingController::new(ControllerId::new(1), ListingMode::Grid);
        let ticket = listing.mount();
        listing.apply(
            &ticket,
            Err(FetchFailure::Failed("Failed to fetch categories".to_string())),
        );

        match present_listing(&listing, 0, false).body {
            ListingBody::Failed(panel) => assert_eq!(panel.message, "Failed to fetch categories"),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_home_modal_and_selection() {
        let mut page = HomePage::new();
        while page.selected() != HomeItem::ResponsiveDesign {
            page.select_next();
        }
        page.activate();

        let vm = present_home(&page);
        assert_eq!(vm.actions.len(), 2);
        assert_eq!(vm.features.len(), 4);
        assert!(vm.features[2].selected);
        assert_eq!(vm.modal.map(|m| m.title), Some("Responsive Design".to_string()));
    }
}
