use anyhow::{Result, bail};
use shopfront_engine::{ControllerId, FetchTicket, ListingController, ListingDisplay, ListingMode};
use shopfront_types::CategoryFilter;

use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_product_list;
use crate::presentation::{ConsoleRenderer, Renderer};

/// Fetch the catalog the way the listing page does, then narrow it by
/// category and search text
pub fn handle(
    ctx: &ExecutionContext,
    category: Option<String>,
    search: Option<String>,
    compact: bool,
    format: OutputFormat,
) -> Result<()> {
    let mode = if compact {
        ListingMode::Compact
    } else {
        ListingMode::Grid
    };
    let mut controller = ListingController::new(ControllerId::new(1), mode);

    let ticket = controller.mount();
    fetch(ctx, &mut controller, ticket)?;

    if let Some(raw) = category
        && let Some(ticket) = controller.select_category(CategoryFilter::parse(&raw))
    {
        fetch(ctx, &mut controller, ticket)?;
    }

    if let Some(query) = search {
        controller.set_query(query);
    }

    let filter = controller.filter();
    let result = match controller.display() {
        ListingDisplay::Products { items, .. } => {
            present_product_list(mode.title(), &filter.category, &filter.query, &items, compact)
        }
        ListingDisplay::Failed(message) => bail!("{}", message),
        ListingDisplay::Loader => bail!("{}", shopfront_engine::UNEXPECTED_ERROR),
    };

    ConsoleRenderer::new(format == OutputFormat::Json).render(result)
}

/// Run one ticket to completion and stop on failure
fn fetch(
    ctx: &ExecutionContext,
    controller: &mut ListingController,
    ticket: FetchTicket,
) -> Result<()> {
    let service = ctx.shopfront()?.service();
    let result = ctx.block_on(service.execute(&ticket.request))?;
    controller.apply(&ticket, result);

    if let Some(message) = controller.phase().error_message() {
        bail!("{}", message);
    }
    Ok(())
}
