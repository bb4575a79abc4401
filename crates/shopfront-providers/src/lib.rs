pub mod error;
pub mod http;
pub mod traits;

pub use error::{Error, Result};
pub use http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, HttpCatalog};
pub use traits::{CatalogSource, Operation};
