use shopfront_types::{Category, CategoryFilter, Product, ProductId};
use std::fmt;

use crate::{PRODUCT_NOT_FOUND, UNEXPECTED_ERROR};

/// Identity of one mounted controller instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerId(u64);

impl ControllerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a controller needs fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Whole catalog plus the category list, concurrently, fail-fast
    Initial,
    /// Whole catalog (`All`) or a single category
    Products(CategoryFilter),
    /// A single product
    Detail(ProductId),
}

impl fmt::Display for FetchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchRequest::Initial => f.write_str("initial"),
            FetchRequest::Products(filter) => write!(f, "products({})", filter),
            FetchRequest::Detail(id) => write!(f, "detail({})", id),
        }
    }
}

/// Successful result of a `FetchRequest`
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Catalog {
        products: Vec<Product>,
        categories: Vec<Category>,
    },
    Products(Vec<Product>),
    Product(Product),
}

/// Failed result of a `FetchRequest`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    NotFound,
    Failed(String),
}

impl FetchFailure {
    /// User-facing message for the Failed display state
    pub fn message(&self) -> String {
        match self {
            FetchFailure::NotFound => PRODUCT_NOT_FOUND.to_string(),
            FetchFailure::Failed(message) if message.trim().is_empty() => {
                UNEXPECTED_ERROR.to_string()
            }
            FetchFailure::Failed(message) => message.clone(),
        }
    }
}

/// A dispatched request, stamped with the dispatching controller and its
/// generation at dispatch time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub controller: ControllerId,
    pub generation: u64,
    pub request: FetchRequest,
}

/// Result of handing a completion back to a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The completion matched the latest request and updated state
    Updated,
    /// A newer request superseded this one; the completion was discarded
    Stale,
}
