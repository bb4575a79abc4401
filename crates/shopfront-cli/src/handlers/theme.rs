use anyhow::Result;

use crate::args::{OutputFormat, ThemeCommand};
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_theme;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(ctx: &mut ExecutionContext, command: ThemeCommand, format: OutputFormat) -> Result<()> {
    let renderer = ConsoleRenderer::new(format == OutputFormat::Json);
    let preferences = ctx.shopfront_mut()?.preferences_mut();

    let result = match command {
        ThemeCommand::Show => present_theme(preferences.theme(), None),
        ThemeCommand::Toggle => {
            let previous = preferences.theme();
            let theme = preferences.toggle_theme();
            present_theme(theme, Some(previous))
        }
    };

    renderer.render(result)
}
