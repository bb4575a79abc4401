//! Scripted in-memory catalog.
//!
//! `FakeCatalog` answers from a fixed product list and can be told to fail
//! individual operations or to delay them, which is how tests provoke
//! out-of-order responses.

use async_trait::async_trait;
use shopfront_providers::{CatalogSource, Error, Operation, Result};
use shopfront_types::{Category, Product, ProductId};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use crate::fixtures::categories_of;

pub struct FakeCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    failures: HashSet<Operation>,
    panics: HashSet<Operation>,
    delays: HashMap<Operation, Duration>,
    category_delays: HashMap<Category, Duration>,
    calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    /// Serve `products`; categories default to the distinct product categories.
    pub fn new(products: Vec<Product>) -> Self {
        let categories = categories_of(&products);
        Self {
            products,
            categories,
            failures: HashSet::new(),
            panics: HashSet::new(),
            delays: HashMap::new(),
            category_delays: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Make every call of `op` fail with its fetch message.
    pub fn failing(mut self, op: Operation) -> Self {
        self.failures.insert(op);
        self
    }

    /// Make every call of `op` panic, as a buggy source would.
    pub fn panicking(mut self, op: Operation) -> Self {
        self.panics.insert(op);
        self
    }

    /// Delay every call of `op`.
    pub fn with_delay(mut self, op: Operation, delay: Duration) -> Self {
        self.delays.insert(op, delay);
        self
    }

    /// Delay `list_by_category` for one category only.
    pub fn with_category_delay(mut self, category: &str, delay: Duration) -> Self {
        self.category_delays.insert(Category::from(category), delay);
        self
    }

    /// Calls received so far, e.g. `["list_all", "list_by_category(jewelery)"]`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    async fn enter(&self, op: Operation, extra_delay: Option<Duration>) -> Result<()> {
        if let Some(delay) = self.delays.get(&op) {
            tokio::time::sleep(*delay).await;
        }
        if let Some(delay) = extra_delay {
            tokio::time::sleep(delay).await;
        }
        if self.panics.contains(&op) {
            panic!("{} exploded", op.failure_message());
        }
        if self.failures.contains(&op) {
            return Err(Error::fetch(op.failure_message()));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogSource for FakeCatalog {
    async fn list_all(&self) -> Result<Vec<Product>> {
        self.record("list_all".to_string());
        self.enter(Operation::ListAll, None).await?;
        Ok(self.products.clone())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product> {
        self.record(format!("get_by_id({})", id));
        self.enter(Operation::GetById, None).await?;
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    async fn list_by_category(&self, category: &Category) -> Result<Vec<Product>> {
        self.record(format!("list_by_category({})", category));
        let extra = self.category_delays.get(category).copied();
        self.enter(Operation::ListByCategory, extra).await?;
        Ok(self
            .products
            .iter()
            .filter(|p| &p.category == category)
            .cloned()
            .collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.record("list_categories".to_string());
        self.enter(Operation::ListCategories, None).await?;
        Ok(self.categories.clone())
    }
}
