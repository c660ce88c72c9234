//! Catalog listing commands.

use serde::Serialize;

use super::Context;
use crate::error::Result;
use crate::i18n::{Catalog, Locale};
use crate::output::Displayable;

#[derive(Debug, Clone, Serialize)]
struct LocaleRow {
    code: Locale,
    name: &'static str,
    initial: bool,
    fallback: bool,
}

impl Displayable for LocaleRow {
    fn table_row(&self) -> Vec<String> {
        let mut notes = Vec::new();
        if self.initial {
            notes.push("initial");
        }
        if self.fallback {
            notes.push("fallback");
        }
        vec![self.code.to_string(), self.name.to_string(), notes.join(", ")]
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["CODE", "NAME", "NOTES"]
    }
}

#[derive(Debug, Clone, Serialize)]
struct EntryRow {
    key: String,
    text: String,
}

impl Displayable for EntryRow {
    fn table_row(&self) -> Vec<String> {
        vec![self.key.clone(), self.text.clone()]
    }

    fn table_headers() -> Vec<&'static str> {
        vec!["KEY", "TEXT"]
    }
}

/// List supported locales.
pub async fn locales(ctx: &Context) -> Result<()> {
    let initial = ctx.config.initial_locale();
    let rows: Vec<LocaleRow> = Locale::ALL
        .into_iter()
        .map(|code| LocaleRow {
            code,
            name: code.native_name(),
            initial: code == initial,
            fallback: code == Locale::FALLBACK,
        })
        .collect();

    ctx.output.table(&rows)
}

/// Show every translation of the configured locale.
///
/// Keys are taken from the fallback locale, so gaps show up as fallback text.
pub async fn catalog(ctx: &Context) -> Result<()> {
    let catalog = Catalog::builtin();
    let locale = ctx.config.initial_locale();

    let rows: Vec<EntryRow> = catalog
        .key_paths(Locale::FALLBACK)
        .into_iter()
        .map(|key| {
            let text = catalog.translate(Some(locale), &key);
            EntryRow { key, text }
        })
        .collect();

    ctx.output.table(&rows)
}
