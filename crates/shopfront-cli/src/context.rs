use anyhow::{Context as _, Result, anyhow};
use once_cell::sync::OnceCell;
use shopfront_runtime::{OpenOptions, Shopfront};
use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

/// Per-invocation state; the catalog client and the async runtime are built
/// on first use so commands that need neither stay cheap.
pub struct ExecutionContext {
    data_dir: PathBuf,
    options: OpenOptions,
    shopfront: OnceCell<Shopfront>,
    runtime: OnceCell<Runtime>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, options: OpenOptions) -> Self {
        Self {
            data_dir,
            options,
            shopfront: OnceCell::new(),
            runtime: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn shopfront(&self) -> Result<&Shopfront> {
        self.shopfront.get_or_try_init(|| {
            Shopfront::open(&self.data_dir, self.options.clone())
                .with_context(|| format!("failed to open {}", self.data_dir.display()))
        })
    }

    pub fn shopfront_mut(&mut self) -> Result<&mut Shopfront> {
        self.shopfront()?;
        self.shopfront
            .get_mut()
            .ok_or_else(|| anyhow!("catalog client not initialized"))
    }

    /// Move the client out; used by `browse`, which owns it for the session
    pub fn take_shopfront(&mut self) -> Result<Shopfront> {
        self.shopfront()?;
        self.shopfront
            .take()
            .ok_or_else(|| anyhow!("catalog client not initialized"))
    }

    pub fn runtime(&self) -> Result<&Runtime> {
        self.runtime.get_or_try_init(|| {
            tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .thread_name("shopfront-fetch")
                .enable_all()
                .build()
                .context("failed to start async runtime")
        })
    }

    pub fn block_on<F: Future>(&self, future: F) -> Result<F::Output> {
        Ok(self.runtime()?.block_on(future))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_execution_context_lazy_loading() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = ExecutionContext::new(temp_dir.path().to_path_buf(), OpenOptions::default());

        assert!(ctx.shopfront.get().is_none(), "client should not be built initially");
        assert!(ctx.runtime.get().is_none(), "runtime should not be started initially");

        assert!(ctx.shopfront().is_ok());
        assert!(ctx.shopfront.get().is_some());
        assert!(ctx.runtime.get().is_none(), "runtime should stay unstarted until needed");
    }

    #[test]
    fn test_take_shopfront_leaves_context_empty() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = ExecutionContext::new(temp_dir.path().to_path_buf(), OpenOptions::default());

        let shopfront = ctx.take_shopfront().unwrap();
        assert_eq!(shopfront.data_dir(), temp_dir.path());
        assert!(ctx.shopfront.get().is_none());
    }

    #[test]
    fn test_invalid_config_surfaces_on_first_use() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "[catalog\n").unwrap();
        let ctx = ExecutionContext::new(temp_dir.path().to_path_buf(), OpenOptions::default());

        let err = ctx.shopfront().err().unwrap();
        assert!(err.to_string().contains("failed to open"));
    }

    #[test]
    fn test_block_on_runs_future() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = ExecutionContext::new(temp_dir.path().to_path_buf(), OpenOptions::default());
        assert_eq!(ctx.block_on(async { 2 + 2 }).unwrap(), 4);
    }
}
