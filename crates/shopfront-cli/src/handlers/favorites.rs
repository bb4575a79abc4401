use anyhow::Result;
use shopfront_types::ProductId;

use crate::args::{FavoritesCommand, OutputFormat};
use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_favorite_toggle, present_favorites};
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(ctx: &mut ExecutionContext, command: FavoritesCommand, format: OutputFormat) -> Result<()> {
    let renderer = ConsoleRenderer::new(format == OutputFormat::Json);

    match command {
        FavoritesCommand::List => {
            let preferences = ctx.shopfront()?.preferences();
            renderer.render(present_favorites(preferences.favorites()))
        }
        FavoritesCommand::Toggle { id } => {
            let id: ProductId = id.parse()?;

            let preferences = ctx.shopfront_mut()?.preferences_mut();
            let favorite = preferences.toggle_favorite(id);
            let total = preferences.favorites().len();
            tracing::debug!(product = %id, favorite, total, "favorite toggled");

            renderer.render(present_favorite_toggle(id, favorite, total))
        }
    }
}
