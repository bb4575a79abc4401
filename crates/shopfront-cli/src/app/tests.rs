use super::*;
use shopfront_engine::{ListingMode, NavigationState};
use shopfront_providers::Operation;
use shopfront_runtime::{CatalogService, Config, MemoryStore};
use shopfront_testing::FakeCatalog;
use shopfront_testing::fixtures::sample_products;
use shopfront_types::{ProductId, Theme};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;
use tokio::runtime::Runtime;

use crate::presentation::view_models::{DetailBody, ListingBody};

struct Harness {
    _runtime: Runtime,
    app: App,
    rx: Receiver<TuiEvent<Completion>>,
}

impl Harness {
    fn new(route: Route) -> Self {
        Self::with_catalog(route, FakeCatalog::new(sample_products()))
    }

    fn with_catalog(route: Route, catalog: FakeCatalog) -> Self {
        let runtime = Runtime::new().unwrap();
        let (tx, rx) = mpsc::channel();
        let shopfront = Shopfront::from_parts(
            PathBuf::from("unused"),
            Config::default(),
            CatalogService::new(Arc::new(catalog)),
            Box::new(MemoryStore::new()),
        );
        let app = App::new(shopfront, route, runtime.handle().clone(), tx);
        Self {
            _runtime: runtime,
            app,
            rx,
        }
    }

    fn next_completion(&self) -> Completion {
        match self.rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            TuiEvent::Completed(completion) => completion,
            TuiEvent::Error(msg) => panic!("unexpected error event: {}", msg),
        }
    }

    fn settle(&mut self) -> Applied {
        let completion = self.next_completion();
        self.app.apply(completion)
    }

    fn listing_body(&self) -> ListingBody {
        match self.app.build_screen().page {
            PageViewModel::Listing(listing) => listing.body,
            other => panic!("expected listing page, got {:?}", other),
        }
    }
}

#[test]
fn test_listing_loads_on_mount() {
    let mut h = Harness::new(Route::Products);
    assert!(matches!(h.listing_body(), ListingBody::Loading));

    assert_eq!(h.settle(), Applied::Updated);

    match h.listing_body() {
        ListingBody::Products { cards, compact, .. } => {
            assert_eq!(cards.len(), 4);
            assert!(!compact);
        }
        other => panic!("expected products, got {:?}", other),
    }
}

#[test]
fn test_completion_for_unmounted_page_is_discarded() {
    let mut h = Harness::new(Route::Products);
    h.app.perform(Action::Navigate(Route::List));

    // Both pages fetched; only the one for /list may land
    let mut applied = vec![h.settle(), h.settle()];
    applied.sort_by_key(|a| *a == Applied::Updated);
    assert_eq!(applied, vec![Applied::Stale, Applied::Updated]);

    match h.listing_body() {
        ListingBody::Products { compact, .. } => assert!(compact),
        other => panic!("expected compact products, got {:?}", other),
    }
}

#[test]
fn test_search_card_focuses_search_field() {
    let mut h = Harness::new(Route::Home);
    for _ in 0..3 {
        h.app.perform(Action::HomeNext);
    }
    h.app.perform(Action::HomeActivate);

    assert_eq!(h.app.route(), &Route::Products);
    assert_eq!(
        h.app.input_mode(),
        InputMode::Listing {
            search_focused: true
        }
    );
}

#[test]
fn test_plain_navigation_does_not_focus_search() {
    let mut h = Harness::new(Route::Home);
    h.app.router.navigate_with(
        Route::List,
        NavigationState {
            scroll_to_search: false,
        },
    );
    h.app.mount_current();

    assert_eq!(
        h.app.input_mode(),
        InputMode::Listing {
            search_focused: false
        }
    );
}

#[test]
fn test_typing_filters_and_resets_selection() {
    let mut h = Harness::new(Route::List);
    h.settle();
    h.app.perform(Action::SelectNext);
    h.app.perform(Action::SelectNext);

    h.app.perform(Action::FocusSearch);
    for c in "drive".chars() {
        h.app.perform(Action::QueryPush(c));
    }

    match h.listing_body() {
        ListingBody::Products {
            cards, selected, ..
        } => {
            assert_eq!(selected, 0);
            assert_eq!(cards.len(), 1);
            assert_eq!(cards[0].id, 9);
        }
        other => panic!("expected products, got {:?}", other),
    }
}

#[test]
fn test_category_cycle_fetches_category() {
    let mut h = Harness::new(Route::Products);
    h.settle();

    h.app.perform(Action::NextCategory);
    assert_eq!(h.settle(), Applied::Updated);

    let Page::Listing(listing) = &h.app.page else {
        panic!("expected listing page");
    };
    assert!(matches!(
        listing.controller.filter().category,
        CategoryFilter::Only(_)
    ));
    assert_eq!(listing.controller.mode(), ListingMode::Grid);

    h.app.perform(Action::PreviousCategory);
    h.settle();
    let Page::Listing(listing) = &h.app.page else {
        panic!("expected listing page");
    };
    assert_eq!(listing.controller.filter().category, CategoryFilter::All);
}

#[test]
fn test_open_selected_shows_detail_and_favorite_toggles() {
    let mut h = Harness::new(Route::Products);
    h.settle();
    h.app.perform(Action::SelectNext);
    h.app.perform(Action::OpenSelected);
    assert_eq!(h.app.route(), &Route::Detail("5".to_string()));

    // Not loaded yet: nothing to favorite
    h.app.perform(Action::ToggleFavorite);
    assert!(!h.app.shopfront().preferences().is_favorite(ProductId::new(5)));

    h.settle();
    h.app.perform(Action::ToggleFavorite);
    assert!(h.app.shopfront().preferences().is_favorite(ProductId::new(5)));

    match h.app.build_screen().page {
        PageViewModel::Detail(detail) => match detail.body {
            DetailBody::Ready(product) => assert!(product.favorite),
            other => panic!("expected ready detail, got {:?}", other),
        },
        other => panic!("expected detail page, got {:?}", other),
    }

    h.app.perform(Action::Back);
    assert_eq!(h.app.route(), &Route::Products);
}

#[test]
fn test_non_numeric_detail_retry_goes_to_products() {
    let mut h = Harness::new(Route::Detail("abc".to_string()));
    match h.app.build_screen().page {
        PageViewModel::Detail(detail) => {
            assert!(matches!(detail.body, DetailBody::Failed(ref panel) if panel.message == "Product not found"))
        }
        other => panic!("expected detail page, got {:?}", other),
    }

    h.app.perform(Action::Retry);
    assert_eq!(h.app.route(), &Route::Products);
}

#[test]
fn test_theme_toggle_repaints() {
    let mut h = Harness::new(Route::Home);
    assert!(!h.app.build_screen().dark);

    h.app.perform(Action::ToggleTheme);
    assert_eq!(h.app.shopfront().preferences().theme(), Theme::Dark);
    assert!(h.app.build_screen().dark);
}

#[test]
fn test_quit() {
    let mut h = Harness::new(Route::Home);
    assert!(!h.app.should_quit());
    h.app.perform(Action::Quit);
    assert!(h.app.should_quit());
}

#[test]
fn test_panicking_fetch_reports_fatal_error() {
    let catalog = FakeCatalog::new(sample_products()).panicking(Operation::GetById);
    let h = Harness::with_catalog(Route::Detail("5".to_string()), catalog);

    match h.rx.recv_timeout(Duration::from_secs(5)).unwrap() {
        TuiEvent::Error(msg) => {
            assert!(msg.starts_with("Fetch task for detail(5) failed"), "{}", msg)
        }
        TuiEvent::Completed(_) => panic!("expected an error event"),
    }
}
