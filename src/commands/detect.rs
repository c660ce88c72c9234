//! Locale detection diagnostic.

use serde::Serialize;

use super::Context;
use crate::detect::{IpApiLocator, detect_locale};
use crate::error::Result;
use crate::output::OutputFormat;

/// Run locale detection once and report the result.
///
/// Unlike startup detection, failures are reported as errors here.
pub async fn detect(ctx: &Context) -> Result<()> {
    #[derive(Serialize)]
    struct DetectOutput {
        url: String,
        locale: crate::i18n::Locale,
    }

    let locator = IpApiLocator::new(ctx.config.geoip.url()?, ctx.config.geoip.timeout());
    ctx.output.info(&format!("Querying {}...", locator.url()));

    let locale = detect_locale(&locator).await?;

    if ctx.output.format() == OutputFormat::Table {
        ctx.output.success(&format!("Detected language: {} ({locale})", locale.native_name()));
        ctx.output.line(locale.code());
        Ok(())
    } else {
        ctx.output.value(&DetectOutput {
            url: locator.url().to_string(),
            locale,
        })
    }
}
