use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive storefront (default)")]
    Browse {
        #[arg(long, help = "Route to open, e.g. /products, /list or /products/3")]
        route: Option<String>,
    },

    #[command(about = "List products, optionally filtered by category and search text")]
    Products {
        #[arg(long, help = "Category to fetch (\"all\" for the whole catalog)")]
        category: Option<String>,

        #[arg(long, help = "Case-insensitive match against title and description")]
        search: Option<String>,

        #[arg(long, help = "One line per product")]
        compact: bool,
    },

    #[command(about = "Show one product with its favorite status")]
    Show {
        #[arg(help = "Product id")]
        id: String,
    },

    #[command(about = "List catalog categories")]
    Categories,

    #[command(about = "Manage favorite products")]
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommand,
    },

    #[command(about = "Show or switch the color theme")]
    Theme {
        #[command(subcommand)]
        command: ThemeCommand,
    },
}

#[derive(Subcommand)]
pub enum FavoritesCommand {
    #[command(about = "List favorite product ids")]
    List,

    #[command(about = "Add a product to favorites, or remove it if already present")]
    Toggle {
        #[arg(help = "Product id")]
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    #[command(about = "Print the current theme")]
    Show,

    #[command(about = "Switch between light and dark")]
    Toggle,
}
