use anyhow::{Result, bail};
use shopfront_providers::CatalogSource;

use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_categories;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let source = ctx.shopfront()?.service().source();
    let categories = match ctx.block_on(source.list_categories())? {
        Ok(categories) => categories,
        Err(err) => bail!("{}", shopfront_runtime::service::to_failure(err).message()),
    };

    ConsoleRenderer::new(format == OutputFormat::Json).render(present_categories(&categories))
}
