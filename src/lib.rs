//! stackgen
//!
//! Localization layer of the Tech Stack Generator: a three-locale message
//! catalog, an observable active-locale cell, and a one-shot locale
//! resolver that picks the display language from the caller's IP address.
//!
//! ## Usage
//!
//! ```bash
//! stackgen render                      # Draw the start screen, switch language once detected
//! stackgen translate result.title --locale ja
//! stackgen catalog --locale en -o json
//! stackgen detect                      # Report the language detected for this machine
//! ```
//!
//! ## Library
//!
//! ```rust,ignore
//! use stackgen::app::App;
//! use stackgen::detect::IpApiLocator;
//!
//! let locator = IpApiLocator::new(url, timeout);
//! let app = App::start(Locale::Zh, Some(locator), |i18n| {
//!     println!("{}", stackgen::t!(i18n, "title"));
//! });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod detect;
pub mod error;
pub mod i18n;
pub mod output;

pub use cli::Cli;
pub use error::{DetectionError, Error, Result};

/// Run the CLI with the given arguments.
///
/// This is the main entry point for the CLI, parsing arguments and
/// dispatching to the appropriate command handler.
pub async fn run(args: Vec<String>) -> Result<()> {
    use clap::Parser;

    let cli_args = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            // Print clap error (includes help/version)
            e.print().ok();
            // Exit successfully for help/version, otherwise return error
            use clap::error::ErrorKind;
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => return Ok(()),
                _ => return Err(Error::other("")),
            }
        }
    };

    init_logging(cli_args.debug);

    let ctx = commands::Context::new(&cli_args)?;

    commands::execute(&ctx, &cli_args.command).await
}

/// Initialize tracing/logging.
///
/// Logs go to stderr; `RUST_LOG` overrides the default filter.
fn init_logging(debug: bool) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let default_filter = if debug {
        "stackgen=debug"
    } else {
        "stackgen=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(debug),
        )
        .try_init();
}
