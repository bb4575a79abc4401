use anyhow::{Result, bail};
use shopfront_engine::{ControllerId, DetailController, DetailDisplay};

use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_detail;
use crate::presentation::view_models::CommandResultViewModel;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(ctx: &ExecutionContext, raw_id: String, format: OutputFormat) -> Result<()> {
    let shopfront = ctx.shopfront()?;
    let mut controller = DetailController::new(ControllerId::new(1), raw_id);

    if let Some(ticket) = controller.mount() {
        let result = ctx.block_on(shopfront.service().execute(&ticket.request))?;
        controller.apply(&ticket, result);
    }

    let product = match controller.display() {
        DetailDisplay::Ready(product) => product,
        DetailDisplay::Failed(message) => bail!("{}", message),
        DetailDisplay::Loader => bail!("{}", shopfront_engine::UNEXPECTED_ERROR),
    };

    let favorite = shopfront.preferences().is_favorite(product.id);
    let result = CommandResultViewModel::new(present_detail(product, favorite));
    ConsoleRenderer::new(format == OutputFormat::Json).render(result)
}
