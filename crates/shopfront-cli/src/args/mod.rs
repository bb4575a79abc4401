// NOTE: Command Organization Rationale
//
// Why `browse` as the default (not a help screen)?
// - The interactive storefront is the product; one-shot commands are for
//   scripting and quick lookups
// - `shopfront` with no arguments behaves like opening the site's home page

mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(about = "Browse a FakeStore-style product catalog from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Data directory [default: $SHOPFRONT_PATH or the system data directory]")]
    pub data_dir: Option<String>,

    #[arg(long, global = true, help = "Catalog service base URL")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "Per-request timeout in seconds (0 disables)")]
    pub timeout_secs: Option<u64>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
