use async_trait::async_trait;
use shopfront_types::{Category, Product, ProductId};

use crate::Result;

/// Remote product catalog
///
/// Responsibilities:
/// - List the whole catalog, one product, or one category
/// - List the categories used to populate filter menus
///
/// Pure request/response: implementations neither retry nor cache.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// `GET /products`
    async fn list_all(&self) -> Result<Vec<Product>>;

    /// `GET /products/{id}`; unknown ids fail with `Error::NotFound`
    async fn get_by_id(&self, id: ProductId) -> Result<Product>;

    /// `GET /products/category/{category}`; unknown categories are the
    /// server's business (usually an empty list)
    async fn list_by_category(&self, category: &Category) -> Result<Vec<Product>>;

    /// `GET /products/categories`
    async fn list_categories(&self) -> Result<Vec<Category>>;
}

/// Catalog operations, used for error messages and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListAll,
    GetById,
    ListByCategory,
    ListCategories,
}

impl Operation {
    /// User-facing message reported when this operation fails
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::ListAll => "Failed to fetch products",
            Operation::GetById => "Failed to fetch product details",
            Operation::ListByCategory => "Failed to fetch products by category",
            Operation::ListCategories => "Failed to fetch categories",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::ListAll => "list_all",
            Operation::GetById => "get_by_id",
            Operation::ListByCategory => "list_by_category",
            Operation::ListCategories => "list_categories",
        }
    }
}
