use anyhow::{Result, anyhow, bail};
use is_terminal::IsTerminal;
use shopfront_engine::Route;
use std::sync::mpsc;

use crate::app::App;
use crate::context::ExecutionContext;
use crate::presentation::renderers::TuiRenderer;

/// Route the storefront opens on: the flag, then `[ui] default_route`,
/// then home
pub fn initial_route(flag: Option<&str>, configured: Option<&str>) -> Result<Route> {
    let raw = flag.or(configured).unwrap_or("/");
    Route::parse(raw).ok_or_else(|| anyhow!("unknown route: {}", raw))
}

pub fn handle(ctx: &mut ExecutionContext, route: Option<String>) -> Result<()> {
    let shopfront = ctx.take_shopfront()?;
    let initial = initial_route(route.as_deref(), shopfront.config().default_route())?;

    if !std::io::stdout().is_terminal() {
        bail!("browse needs an interactive terminal; try `shopfront products` instead");
    }

    let handle = ctx.runtime()?.handle().clone();
    let (tx, rx) = mpsc::channel();
    let mut app = App::new(shopfront, initial, handle, tx);
    tracing::info!(route = %app.route(), "storefront opened");

    let result = TuiRenderer::new().run(&mut app, rx);
    tracing::info!(theme = %app.shopfront().preferences().theme(), "storefront closed");
    result
}
