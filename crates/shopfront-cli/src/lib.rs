// NOTE: shopfront Architecture Rationale
//
// Why pure controllers (not async state machines)?
// - Page controllers hand out FetchTickets and never await anything
// - The shell decides where requests run (tokio for the TUI, block_on for
//   one-shot commands) and feeds completions back through `apply`
// - Stale completions are rejected by generation, so out-of-order network
//   responses need no cancellation plumbing
//
// Why one listing controller for two pages?
// - `/products` and `/list` fetch, filter and fail identically
// - Only the card layout differs, which is a presentation concern
//
// Why write-through preferences?
// - Theme and favorites are tiny; rewriting the file on every change keeps
//   the on-disk state current even if the terminal is killed

mod app;
mod args;
mod commands;
pub mod context;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, FavoritesCommand, LogLevel, OutputFormat, ThemeCommand};
pub use commands::run;
