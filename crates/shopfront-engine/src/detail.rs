use shopfront_types::{Product, ProductId};

use crate::fetch::{Applied, ControllerId, FetchFailure, FetchOutcome, FetchRequest, FetchTicket};
use crate::phase::Phase;
use crate::{PRODUCT_NOT_FOUND, UNEXPECTED_ERROR};

#[derive(Debug, PartialEq)]
pub enum DetailDisplay<'a> {
    Loader,
    Failed(&'a str),
    Ready(&'a Product),
}

/// Detail page state, keyed by the raw id taken from the route.
///
/// A different id means a different page: the shell mounts a fresh
/// controller instead of reusing this one.
#[derive(Debug)]
pub struct DetailController {
    id: ControllerId,
    raw_id: String,
    product_id: Option<ProductId>,
    phase: Phase,
    product: Option<Product>,
    generation: u64,
}

impl DetailController {
    pub fn new(id: ControllerId, raw_id: impl Into<String>) -> Self {
        let raw_id = raw_id.into();
        let product_id = raw_id.parse::<ProductId>().ok();
        Self {
            id,
            raw_id,
            product_id,
            phase: Phase::Idle,
            product: None,
            generation: 0,
        }
    }

    pub fn id(&self) -> ControllerId {
        self.id
    }

    /// Parsed product id; `None` when the route carried a non-numeric id
    pub fn product_id(&self) -> Option<ProductId> {
        self.product_id
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    /// Start loading the product. A non-numeric id fails immediately with
    /// "Product not found" and issues no request.
    pub fn mount(&mut self) -> Option<FetchTicket> {
        let Some(product_id) = self.product_id else {
            tracing::debug!(raw_id = %self.raw_id, "detail route id is not numeric");
            self.phase = Phase::Failed(PRODUCT_NOT_FOUND.to_string());
            return None;
        };
        Some(self.dispatch(product_id))
    }

    /// Re-issue the detail request after a failure
    pub fn retry(&mut self) -> Option<FetchTicket> {
        if !self.phase.is_failed() {
            return None;
        }
        let product_id = self.product_id?;
        Some(self.dispatch(product_id))
    }

    pub fn apply(
        &mut self,
        ticket: &FetchTicket,
        result: Result<FetchOutcome, FetchFailure>,
    ) -> Applied {
        if ticket.controller != self.id || ticket.generation != self.generation {
            tracing::debug!(
                controller = %self.id,
                request = %ticket.request,
                "discarding stale detail response"
            );
            return Applied::Stale;
        }

        match result {
            Ok(FetchOutcome::Product(product)) => {
                self.product = Some(product);
                self.phase = Phase::Ready;
            }
            Ok(_) => {
                tracing::warn!(request = %ticket.request, "detail received a product list");
                self.phase = Phase::Failed(UNEXPECTED_ERROR.to_string());
            }
            Err(failure) => {
                self.product = None;
                self.phase = Phase::Failed(failure.message());
            }
        }
        Applied::Updated
    }

    pub fn display(&self) -> DetailDisplay<'_> {
        match (&self.phase, &self.product) {
            (Phase::Failed(message), _) => DetailDisplay::Failed(message),
            (Phase::Ready, Some(product)) => DetailDisplay::Ready(product),
            (Phase::Ready, None) => DetailDisplay::Failed(PRODUCT_NOT_FOUND),
            (Phase::Idle | Phase::Loading, _) => DetailDisplay::Loader,
        }
    }

    fn dispatch(&mut self, product_id: ProductId) -> FetchTicket {
        self.generation += 1;
        self.phase = Phase::Loading;
        FetchTicket {
            controller: self.id,
            generation: self.generation,
            request: FetchRequest::Detail(product_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_testing::fixtures::product;

    fn detail(raw_id: &str) -> DetailController {
        DetailController::new(ControllerId::new(7), raw_id)
    }

    #[test]
    fn test_mount_requests_parsed_id() {
        let mut controller = detail("3");
        let ticket = controller.mount().unwrap();

        assert_eq!(ticket.request, FetchRequest::Detail(ProductId::new(3)));
        assert_eq!(controller.display(), DetailDisplay::Loader);
    }

    #[test]
    fn test_ready_after_success() {
        let mut controller = detail("3");
        let ticket = controller.mount().unwrap();

        controller.apply(&ticket, Ok(FetchOutcome::Product(product(3, "Mug", "home"))));

        match controller.display() {
            DetailDisplay::Ready(p) => assert_eq!(p.title, "Mug"),
            other => panic!("expected ready, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_id_fails_with_not_found_message() {
        let mut controller = detail("999");
        let ticket = controller.mount().unwrap();

        controller.apply(&ticket, Err(FetchFailure::NotFound));

        assert_eq!(controller.phase(), &Phase::Failed("Product not found".to_string()));
        assert_eq!(controller.display(), DetailDisplay::Failed("Product not found"));
    }

    #[test]
    fn test_non_numeric_id_fails_without_request() {
        let mut controller = detail("abc");

        assert!(controller.mount().is_none());
        assert!(controller.product_id().is_none());
        assert_eq!(controller.display(), DetailDisplay::Failed("Product not found"));
        assert!(controller.retry().is_none());
    }

    #[test]
    fn test_fetch_error_message_is_kept() {
        let mut controller = detail("4");
        let ticket = controller.mount().unwrap();

        controller.apply(
            &ticket,
            Err(FetchFailure::Failed("Failed to fetch product details".to_string())),
        );

        assert_eq!(
            controller.display(),
            DetailDisplay::Failed("Failed to fetch product details")
        );
    }

    #[test]
    fn test_retry_reissues_same_request() {
        let mut controller = detail("4");
        let first = controller.mount().unwrap();
        controller.apply(&first, Err(FetchFailure::Failed(String::new())));
        assert_eq!(
            controller.display(),
            DetailDisplay::Failed("An unexpected error occurred")
        );

        let retry = controller.retry().unwrap();
        assert_eq!(retry.request, first.request);
        assert_eq!(controller.apply(&first, Ok(FetchOutcome::Product(product(4, "Old", "x")))), Applied::Stale);

        controller.apply(&retry, Ok(FetchOutcome::Product(product(4, "Lamp", "home"))));
        assert_eq!(controller.phase(), &Phase::Ready);
    }
}
