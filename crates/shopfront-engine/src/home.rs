use serde::Serialize;

use crate::route::{NavigationState, Route};

/// Selectable entries of the home page, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeItem {
    ViewProducts,
    ViewList,
    ProductCatalog,
    SearchAndFilter,
    ResponsiveDesign,
    DarkMode,
}

impl HomeItem {
    pub const ALL: [HomeItem; 6] = [
        HomeItem::ViewProducts,
        HomeItem::ViewList,
        HomeItem::ProductCatalog,
        HomeItem::SearchAndFilter,
        HomeItem::ResponsiveDesign,
        HomeItem::DarkMode,
    ];

    /// Hero actions are buttons, the rest are feature cards
    pub fn is_feature_card(self) -> bool {
        !matches!(self, HomeItem::ViewProducts | HomeItem::ViewList)
    }
}

/// What the shell must do after a home item is activated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeEffect {
    Navigate {
        route: Route,
        state: NavigationState,
    },
    ToggleTheme,
    /// Handled inside the page (modal opened)
    None,
}

/// Home page state: the focused item and the modal's open flag
#[derive(Debug, Default)]
pub struct HomePage {
    selected: usize,
    modal_open: bool,
}

impl HomePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> HomeItem {
        HomeItem::ALL[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % HomeItem::ALL.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + HomeItem::ALL.len() - 1) % HomeItem::ALL.len();
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Activate the focused item
    pub fn activate(&mut self) -> HomeEffect {
        match self.selected() {
            HomeItem::ViewProducts | HomeItem::ProductCatalog => HomeEffect::Navigate {
                route: Route::Products,
                state: NavigationState::default(),
            },
            HomeItem::ViewList => HomeEffect::Navigate {
                route: Route::List,
                state: NavigationState::default(),
            },
            HomeItem::SearchAndFilter => HomeEffect::Navigate {
                route: Route::Products,
                state: NavigationState {
                    scroll_to_search: true,
                },
            },
            HomeItem::ResponsiveDesign => {
                self.modal_open = true;
                HomeEffect::None
            }
            HomeItem::DarkMode => HomeEffect::ToggleTheme,
        }
    }
}
