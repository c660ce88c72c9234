//! Command-line argument parsing and command definitions.
//!
//! Uses clap with derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Tech Stack Generator - localized terminal front-end
#[derive(Parser, Debug)]
#[command(name = "stackgen")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Initial display language (en, zh, ja)
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Skip IP-based language detection
    #[arg(long, global = true)]
    pub no_detect: bool,

    /// Output format
    #[arg(
        short,
        long,
        global = true,
        default_value = "table",
        value_parser = ["table", "json", "yaml"]
    )]
    pub output: String,

    /// Color output mode
    #[arg(long, global = true, default_value = "auto", value_parser = ["auto", "always", "never"])]
    pub color: String,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the start screen, then re-render once the language is detected
    Render {
        /// Seconds to wait for language detection
        #[arg(long, default_value = "6")]
        wait: u64,

        /// Render the result screen for FRONTEND,BACKEND,DATABASE
        #[arg(long, value_name = "FRONTEND,BACKEND,DATABASE")]
        stack: Option<String>,
    },

    /// Translate a single key path (e.g. result.title)
    Translate {
        /// Dotted key path
        key: String,
    },

    /// Show every translation of a locale
    Catalog,

    /// List supported locales
    Locales,

    /// Detect the language from this machine's IP address
    Detect,

    /// Verify that all locales define the same keys
    Check,
}
