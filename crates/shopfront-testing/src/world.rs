//! TestWorld pattern for declarative CLI integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated data directory
//! - Pointing the CLI at a stub catalog server
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use shopfront_types::Product;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::StubServer;
use crate::fixtures::sample_products;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use shopfront_testing::TestWorld;
///
/// let world = TestWorld::new().with_catalog(&shopfront_testing::fixtures::sample_products());
///
/// let result = world.run(&["products"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    server: Option<StubServer>,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment without a catalog server.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".shopfront");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            server: None,
            env_vars: HashMap::new(),
        }
    }

    /// Environment serving the sample catalog.
    pub fn with_sample_catalog() -> Self {
        Self::new().with_catalog(&sample_products())
    }

    /// Serve `products` from a stub server and point the CLI at it.
    pub fn with_catalog(mut self, products: &[Product]) -> Self {
        let server = StubServer::with_catalog(products).expect("Failed to start stub server");
        self.server = Some(server);
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn server(&self) -> Option<&StubServer> {
        self.server.as_ref()
    }

    /// Write `config.toml` into the data directory.
    pub fn write_config(&self, content: &str) -> Result<()> {
        std::fs::write(self.data_dir.join("config.toml"), content)?;
        Ok(())
    }

    /// Read back `preferences.json`, if the CLI wrote one.
    pub fn preferences(&self) -> Option<serde_json::Value> {
        let raw = std::fs::read_to_string(self.data_dir.join("preferences.json")).ok()?;
        serde_json::from_str(&raw).ok()
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());

        if let Some(server) = &self.server {
            cmd.arg("--base-url").arg(server.base_url());
        }

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("SHOPFRONT_BASE_URL");
        cmd.env_remove("SHOPFRONT_PATH");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("shopfront")
            .map_err(|e| anyhow::anyhow!("Failed to find shopfront binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
