//! Catalog consistency check.

use super::Context;
use crate::error::Result;
use crate::i18n::{Catalog, Locale};

/// Verify that the built-in catalog is complete for every locale.
pub async fn check(ctx: &Context) -> Result<()> {
    let catalog = Catalog::from_embedded()?;
    catalog.validate()?;

    let keys = catalog.key_paths(Locale::FALLBACK).len();
    ctx.output.success(&format!("Catalog OK: {keys} keys in {} locales", Locale::ALL.len()));
    Ok(())
}
