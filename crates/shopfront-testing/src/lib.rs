//! Testing infrastructure for shopfront tests.
//!
//! This crate provides utilities for writing robust tests:
//! - `fixtures`: Sample catalog data
//! - `fake`: Scripted in-memory `CatalogSource` with failure and delay injection
//! - `server`: Minimal HTTP stub serving canned catalog responses
//! - `world`: `TestWorld` fluent interface for CLI integration tests

pub mod fake;
pub mod fixtures;
pub mod server;
pub mod world;

pub use fake::FakeCatalog;
pub use server::StubServer;
pub use world::TestWorld;
