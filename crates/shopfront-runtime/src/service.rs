use shopfront_engine::{FetchFailure, FetchOutcome, FetchRequest};
use shopfront_providers::CatalogSource;
use shopfront_types::CategoryFilter;
use std::sync::Arc;

/// Executes controller fetch requests against a catalog source
#[derive(Clone)]
pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &Arc<dyn CatalogSource> {
        &self.source
    }

    /// Run one request to completion.
    ///
    /// `Initial` issues the product and category calls concurrently and
    /// fails as soon as either fails.
    pub async fn execute(&self, request: &FetchRequest) -> Result<FetchOutcome, FetchFailure> {
        tracing::debug!(%request, "executing fetch");
        self.run(request).await.map_err(to_failure)
    }

    async fn run(&self, request: &FetchRequest) -> shopfront_providers::Result<FetchOutcome> {
        let outcome = match request {
            FetchRequest::Initial => {
                let (products, categories) =
                    futures::try_join!(self.source.list_all(), self.source.list_categories())?;
                FetchOutcome::Catalog {
                    products,
                    categories,
                }
            }
            FetchRequest::Products(CategoryFilter::All) => {
                FetchOutcome::Products(self.source.list_all().await?)
            }
            FetchRequest::Products(CategoryFilter::Only(category)) => {
                FetchOutcome::Products(self.source.list_by_category(category).await?)
            }
            FetchRequest::Detail(id) => FetchOutcome::Product(self.source.get_by_id(*id).await?),
        };

        Ok(outcome)
    }
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService").finish_non_exhaustive()
    }
}

/// Collapse a provider error into what a controller can display
pub fn to_failure(err: shopfront_providers::Error) -> FetchFailure {
    match err {
        shopfront_providers::Error::NotFound(_) => FetchFailure::NotFound,
        other => {
            tracing::debug!(error = %other, "fetch failed");
            FetchFailure::Failed(other.to_string())
        }
    }
}

