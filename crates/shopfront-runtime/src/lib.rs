pub mod client;
pub mod config;
pub mod error;
pub mod preferences;
pub mod service;
pub mod storage;

pub use client::{OpenOptions, Shopfront, StoredPreferences};
pub use config::{CatalogConfig, Config, UiConfig};
pub use error::{Error, Result};
pub use preferences::{FAVORITES_KEY, Preferences, THEME_KEY};
pub use service::CatalogService;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
