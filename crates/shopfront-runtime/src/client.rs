use shopfront_core::ensure_dir;
use shopfront_providers::HttpCatalog;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::preferences::Preferences;
use crate::service::CatalogService;
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::Result;

/// Preferences as held by a running front end
pub type StoredPreferences = Preferences<Box<dyn KeyValueStore + Send>>;

/// Overrides supplied by the caller (usually CLI flags)
#[derive(Debug, Clone, Default)]
pub struct OpenOptions {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Everything a front end needs: the catalog service, persisted preferences
/// and the loaded configuration
pub struct Shopfront {
    data_dir: PathBuf,
    config: Config,
    service: CatalogService,
    preferences: StoredPreferences,
}

impl Shopfront {
    pub fn open(data_dir: &Path, options: OpenOptions) -> Result<Self> {
        let config = Config::load_from(&Config::path_in(data_dir))?;
        config.validate()?;

        let base_url = config.resolve_base_url(options.base_url.as_deref());
        let timeout = config.resolve_timeout(options.timeout_secs);
        tracing::debug!(%base_url, ?timeout, data_dir = %data_dir.display(), "opening catalog");

        let catalog = HttpCatalog::with_timeout(&base_url, timeout)?;
        let service = CatalogService::new(Arc::new(catalog));
        let preferences = Preferences::load(open_store(data_dir));

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            config,
            service,
            preferences,
        })
    }

    /// Assemble from parts; used by tests and alternate front ends
    pub fn from_parts(
        data_dir: PathBuf,
        config: Config,
        service: CatalogService,
        store: Box<dyn KeyValueStore + Send>,
    ) -> Self {
        Self {
            data_dir,
            config,
            service,
            preferences: Preferences::load(store),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> &CatalogService {
        &self.service
    }

    pub fn preferences(&self) -> &StoredPreferences {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut StoredPreferences {
        &mut self.preferences
    }
}

/// File-backed store when the data directory is usable, otherwise an
/// in-memory one so preferences still work for this session
fn open_store(data_dir: &Path) -> Box<dyn KeyValueStore + Send> {
    if let Err(e) = ensure_dir(data_dir) {
        tracing::warn!(error = %e, "data directory unavailable, preferences will not persist");
        return Box::new(MemoryStore::new());
    }

    match FileStore::open_in(data_dir) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "preferences file unreadable, starting over");
            Box::new(FileStore::reset(data_dir.join(FileStore::FILE_NAME)))
        }
    }
}
