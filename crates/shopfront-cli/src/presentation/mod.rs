//! # Presentation Layer
//!
//! MVVM-style split between the page controllers (`shopfront_engine`) and
//! what ends up on the terminal.
//!
//! ```text
//! [ Handler / App ] --> [ Presenter ] --> [ ViewModel ] --> [ View ] --> [ Renderer ]
//! ```
//!
//! ## Directory Guide
//!
//! ### `view_models/`
//! * Serializable data contracts. No logic; must make sense as JSON.
//!
//! ### `presenters/`
//! * Pure functions from domain types and controller state to view models.
//!   Rating fallbacks, labels and empty-state decisions live here.
//!
//! ### `views/`
//! * `fmt::Display` wrappers for console output and ratatui widgets
//!   (`views/tui/`) for the storefront. Layout and color only.
//!
//! ### `renderers/`
//! * `console.rs`: plain text or JSON on stdout.
//! * `tui.rs`: the interactive event loop.
//!
//! ### `formatters/`
//! * Small string helpers shared by presenters (prices, ratings, truncation).

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::CommandResultViewModel;
