//! Single-key translation command.

use serde::Serialize;

use super::Context;
use crate::error::Result;
use crate::i18n::{I18n, Locale, LocaleState};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct Translation<'a> {
    locale: Locale,
    key: &'a str,
    text: String,
}

/// Print the translation of one key path in the configured locale.
pub async fn translate(ctx: &Context, key: &str) -> Result<()> {
    let i18n = I18n::new(LocaleState::new(ctx.config.initial_locale()));
    let text = i18n.t(key);

    if ctx.output.format() == OutputFormat::Table {
        ctx.output.line(&text);
        Ok(())
    } else {
        ctx.output.value(&Translation {
            locale: i18n.locale(),
            key,
            text,
        })
    }
}
