// Engine module - page controllers, search filtering and routing.
// Everything here is synchronous and I/O free: controllers hand out
// `FetchTicket`s, the runtime executes them, and the outcome is applied back.

pub mod detail;
pub mod fetch;
pub mod home;
pub mod listing;
pub mod phase;
pub mod route;
pub mod search;

pub use detail::{DetailController, DetailDisplay};
pub use fetch::{Applied, ControllerId, FetchFailure, FetchOutcome, FetchRequest, FetchTicket};
pub use home::{HomeEffect, HomeItem, HomePage};
pub use listing::{ListingController, ListingDisplay, ListingMode};
pub use phase::Phase;
pub use route::{NavigationState, Route, Router};
pub use search::{filter_products, matches};

/// Message shown when a detail lookup finds nothing
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Fallback for failures that carry no message
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";
