//! Filterable catalog listing.
//!
//! One controller serves both the grid page (`/products`) and the compact
//! page (`/list`); only the presentation mode differs.

use serde::Serialize;
use shopfront_types::{Category, CategoryFilter, Product, SearchFilterState};

use crate::fetch::{Applied, ControllerId, FetchFailure, FetchOutcome, FetchRequest, FetchTicket};
use crate::phase::Phase;
use crate::search;
use crate::UNEXPECTED_ERROR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingMode {
    Grid,
    Compact,
}

impl ListingMode {
    pub fn title(self) -> &'static str {
        match self {
            ListingMode::Grid => "Our Products",
            ListingMode::Compact => "Product List",
        }
    }
}

/// What the listing page should show right now
#[derive(Debug, PartialEq)]
pub enum ListingDisplay<'a> {
    /// Nothing fetched yet and a request is in flight
    Loader,
    /// The latest request failed; offer a retry
    Failed(&'a str),
    /// Products after search filtering; `refreshing` while a newer request
    /// is in flight over previously fetched data
    Products {
        items: Vec<&'a Product>,
        refreshing: bool,
    },
}

#[derive(Debug)]
pub struct ListingController {
    id: ControllerId,
    mode: ListingMode,
    phase: Phase,
    products: Option<Vec<Product>>,
    categories: Vec<Category>,
    filter: SearchFilterState,
    generation: u64,
    last_request: Option<FetchRequest>,
}

impl ListingController {
    pub fn new(id: ControllerId, mode: ListingMode) -> Self {
        Self {
            id,
            mode,
            phase: Phase::Idle,
            products: None,
            categories: Vec::new(),
            filter: SearchFilterState::new(),
            generation: 0,
            last_request: None,
        }
    }

    pub fn id(&self) -> ControllerId {
        self.id
    }

    pub fn mode(&self) -> ListingMode {
        self.mode
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn filter(&self) -> &SearchFilterState {
        &self.filter
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Products of the last successful fetch, before search filtering
    pub fn products(&self) -> Option<&[Product]> {
        self.products.as_deref()
    }

    /// Enter Loading and request the catalog plus categories.
    pub fn mount(&mut self) -> FetchTicket {
        self.dispatch(FetchRequest::Initial)
    }

    /// Change the category filter.
    ///
    /// Returns `None` when the filter is unchanged. The returned ticket
    /// supersedes every request this controller issued before.
    pub fn select_category(&mut self, category: CategoryFilter) -> Option<FetchTicket> {
        if self.filter.category == category && self.last_request.is_some() {
            return None;
        }
        self.filter.category = category.clone();
        Some(self.dispatch(FetchRequest::Products(category)))
    }

    /// Re-issue the request that failed. Only valid in the Failed state.
    pub fn retry(&mut self) -> Option<FetchTicket> {
        if !self.phase.is_failed() {
            return None;
        }
        let request = self.last_request.clone()?;
        Some(self.dispatch(request))
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.filter.query.push(c);
    }

    pub fn pop_query_char(&mut self) {
        self.filter.query.pop();
    }

    /// Apply a completed fetch. Completions for anything but the most
    /// recently dispatched request are discarded.
    pub fn apply(
        &mut self,
        ticket: &FetchTicket,
        result: Result<FetchOutcome, FetchFailure>,
    ) -> Applied {
        if ticket.controller != self.id || ticket.generation != self.generation {
            // The category list does not depend on the filter, so a superseded
            // initial load still fills an empty filter menu
            if ticket.controller == self.id
                && self.categories.is_empty()
                && let Ok(FetchOutcome::Catalog { categories, .. }) = result
            {
                tracing::debug!(count = categories.len(), "keeping categories from superseded initial load");
                self.categories = categories;
            }
            tracing::debug!(
                controller = %self.id,
                ticket_generation = ticket.generation,
                current_generation = self.generation,
                request = %ticket.request,
                "discarding stale listing response"
            );
            return Applied::Stale;
        }

        match result {
            Ok(FetchOutcome::Catalog {
                products,
                categories,
            }) => {
                self.products = Some(products);
                self.categories = categories;
                self.phase = Phase::Ready;
            }
            Ok(FetchOutcome::Products(products)) => {
                self.products = Some(products);
                self.phase = Phase::Ready;
            }
            Ok(FetchOutcome::Product(_)) => {
                tracing::warn!(request = %ticket.request, "listing received a single product");
                self.phase = Phase::Failed(UNEXPECTED_ERROR.to_string());
            }
            Err(failure) => {
                self.phase = Phase::Failed(failure.message());
            }
        }
        Applied::Updated
    }

    /// Fetched products narrowed by the current search query
    pub fn visible_products(&self) -> Vec<&Product> {
        match &self.products {
            Some(products) => search::filter_products(products, &self.filter.query),
            None => Vec::new(),
        }
    }

    pub fn display(&self) -> ListingDisplay<'_> {
        match &self.phase {
            Phase::Failed(message) => ListingDisplay::Failed(message),
            Phase::Idle => ListingDisplay::Loader,
            Phase::Loading if self.products.is_none() => ListingDisplay::Loader,
            Phase::Loading | Phase::Ready => ListingDisplay::Products {
                items: self.visible_products(),
                refreshing: self.phase.is_loading(),
            },
        }
    }

    fn dispatch(&mut self, request: FetchRequest) -> FetchTicket {
        self.generation += 1;
        self.phase = Phase::Loading;
        self.last_request = Some(request.clone());
        tracing::debug!(
            controller = %self.id,
            generation = self.generation,
            request = %request,
            "listing fetch dispatched"
        );
        FetchTicket {
            controller: self.id,
            generation: self.generation,
            request,
        }
    }
}
