//! Screen rendering command.

use std::time::Duration;

use super::Context;
use crate::app::{App, Stack, render_home, render_result};
use crate::error::Result;
use crate::i18n::I18n;

/// Render the start (or result) screen and re-render on a language switch.
pub async fn render(ctx: &Context, wait_secs: u64, stack: Option<&str>) -> Result<()> {
    let stack = stack.map(Stack::parse).transpose()?;

    let draw = |i18n: &I18n| match &stack {
        Some(stack) => render_result(i18n, stack),
        None => render_home(i18n),
    };

    let mut app = App::bootstrap(&ctx.config, |i18n| ctx.output.raw(&draw(i18n)))?;

    if let Some(locale) = app.settle(Duration::from_secs(wait_secs)).await {
        ctx.output.info(&format!("\nLanguage: {} ({locale})\n", locale.native_name()));
        ctx.output.raw(&draw(app.i18n()));
    }

    Ok(())
}
