use serde::Serialize;
use std::fmt;

use crate::listing::ListingMode;

/// Navigable pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", content = "id", rename_all = "snake_case")]
pub enum Route {
    /// `/`
    Home,
    /// `/products`: grid listing
    Products,
    /// `/products/:id`; the raw segment is kept and parsed by the detail page
    Detail(String),
    /// `/list`: compact listing
    List,
}

impl Route {
    /// Map a URL path to a route. Query strings and trailing slashes are
    /// ignored; unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or("").trim();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["products"] => Some(Route::Products),
            ["products", id] => Some(Route::Detail((*id).to_string())),
            ["list"] => Some(Route::List),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Products => "/products".to_string(),
            Route::Detail(id) => format!("/products/{}", id),
            Route::List => "/list".to_string(),
        }
    }

    /// Presentation mode for listing routes
    pub fn listing_mode(&self) -> Option<ListingMode> {
        match self {
            Route::Products => Some(ListingMode::Grid),
            Route::List => Some(ListingMode::Compact),
            Route::Home | Route::Detail(_) => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// One-shot state attached to a single route transition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Ask the destination to scroll to and focus its search field
    pub scroll_to_search: bool,
}

/// Back-history entries kept; older ones are forgotten
pub const MAX_HISTORY: usize = 64;

/// Current route plus bounded back history
#[derive(Debug)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
    state: NavigationState,
}

impl Router {
    pub fn new(initial: Route) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
            state: NavigationState::default(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Navigate without transient state
    pub fn navigate(&mut self, route: Route) {
        self.navigate_with(route, NavigationState::default());
    }

    /// Navigate carrying one-shot state for the destination.
    ///
    /// Any state left unconsumed by the previous destination is dropped.
    pub fn navigate_with(&mut self, route: Route, state: NavigationState) {
        tracing::debug!(from = %self.current, to = %route, ?state, "navigate");
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
        }
        self.state = state;
    }

    /// Navigate to a path; returns false (and stays put) for unknown paths
    pub fn navigate_path(&mut self, path: &str) -> bool {
        match Route::parse(path) {
            Some(route) => {
                self.navigate(route);
                true
            }
            None => {
                tracing::warn!(path, "ignoring navigation to unknown path");
                false
            }
        }
    }

    /// Return to the previous route; false when there is no history
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                self.state = NavigationState::default();
                true
            }
            None => false,
        }
    }

    /// Consume the scroll-to-search hint. Subsequent calls return false
    /// until another transition sets it again.
    pub fn take_scroll_to_search(&mut self) -> bool {
        std::mem::take(&mut self.state.scroll_to_search)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}
