//! Command implementations for the stackgen CLI.
//!
//! Each submodule implements a group of related commands.

mod check;
mod detect;
mod locales;
mod render;
mod translate;

pub use check::check;
pub use detect::detect;
pub use locales::{catalog, locales};
pub use render::render;
pub use translate::translate;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::error::Result;
use crate::i18n::Locale;
use crate::output::Output;

/// Execution context shared by all commands.
#[derive(Debug)]
pub struct Context {
    /// Effective configuration after applying CLI flags.
    pub config: Config,

    /// Output configuration.
    pub output: Output,
}

impl Context {
    /// Create a new context from parsed CLI options.
    pub fn new(cli: &Cli) -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config, cli)
    }

    /// Create a context from an already loaded configuration.
    ///
    /// CLI flags take precedence over the configuration.
    pub fn with_config(mut config: Config, cli: &Cli) -> Result<Self> {
        if let Some(locale) = &cli.locale {
            config.locale = Some(locale.parse::<Locale>()?);
        }
        if cli.no_detect {
            config.detect = Some(false);
        }

        let output = Output::from_cli(&cli.output, &cli.color, cli.quiet)?;

        Ok(Self { config, output })
    }
}

/// Execute a CLI command.
pub async fn execute(ctx: &Context, command: &Commands) -> Result<()> {
    match command {
        Commands::Render { wait, stack } => render(ctx, *wait, stack.as_deref()).await,
        Commands::Translate { key } => translate(ctx, key).await,
        Commands::Catalog => catalog(ctx).await,
        Commands::Locales => locales(ctx).await,
        Commands::Detect => detect(ctx).await,
        Commands::Check => check(ctx).await,
    }
}
