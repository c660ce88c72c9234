//! Application startup and screen rendering.
//!
//! [`App::bootstrap`] is the startup hook: it builds the localization provider
//! with the initial locale, draws the first frame, then kicks off locale
//! detection in the background and returns at once. Detection is spawned
//! only after the first frame so that frame always shows the initial locale.

use std::fmt::{self, Write};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::detect::{GeoLocator, IpApiLocator, spawn_detection};
use crate::error::Result;
use crate::i18n::{I18n, Locale, LocaleState};
use crate::t;

/// A running application: localization provider plus pending detection.
#[derive(Debug)]
pub struct App {
    i18n: I18n,
    changes: watch::Receiver<Locale>,
    detection: Option<JoinHandle<()>>,
}

impl App {
    /// Build the provider, hand it to `mount` for the first frame, then start
    /// detection with `locator`, if any.
    ///
    /// Must be called from within a tokio runtime when a locator is given.
    pub fn start<L, F>(initial: Locale, locator: Option<L>, mount: F) -> Self
    where
        L: GeoLocator + Send + Sync + 'static,
        F: FnOnce(&I18n),
    {
        let state = LocaleState::new(initial);
        let i18n = I18n::new(state.clone());
        // Subscribe before spawning so an early switch is not missed
        let changes = i18n.subscribe();

        mount(&i18n);

        let detection = locator.map(|locator| spawn_detection(state, locator));

        tracing::debug!(%initial, detecting = detection.is_some(), "Application started");
        Self {
            i18n,
            changes,
            detection,
        }
    }

    /// Start the application as described by `config`, drawing the first
    /// frame with `mount`.
    pub fn bootstrap<F>(config: &Config, mount: F) -> Result<Self>
    where
        F: FnOnce(&I18n),
    {
        let locator = if config.detect_enabled() {
            Some(IpApiLocator::new(config.geoip.url()?, config.geoip.timeout()))
        } else {
            None
        };
        Ok(Self::start(config.initial_locale(), locator, mount))
    }

    /// The localization provider.
    pub const fn i18n(&self) -> &I18n {
        &self.i18n
    }

    /// Wait up to `wait` for detection to finish.
    ///
    /// Returns the new locale if detection switched it. After the wait
    /// elapses detection keeps running detached.
    pub async fn settle(&mut self, wait: Duration) -> Option<Locale> {
        if let Some(handle) = self.detection.take()
            && tokio::time::timeout(wait, handle).await.is_err()
        {
            tracing::debug!(?wait, "Locale detection still pending");
        }

        if self.changes.has_changed().unwrap_or(false) {
            Some(*self.changes.borrow_and_update())
        } else {
            None
        }
    }
}

/// Technologies picked for each category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stack {
    /// Frontend framework.
    pub frontend: String,
    /// Backend framework.
    pub backend: String,
    /// Database.
    pub database: String,
}

impl Stack {
    /// Parse `frontend,backend,database`.
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        match parts.as_slice() {
            [frontend, backend, database]
                if !frontend.is_empty() && !backend.is_empty() && !database.is_empty() =>
            {
                Ok(Self {
                    frontend: (*frontend).to_string(),
                    backend: (*backend).to_string(),
                    database: (*database).to_string(),
                })
            }
            _ => Err(crate::error::Error::invalid_arg(format!(
                "Expected FRONTEND,BACKEND,DATABASE, got '{s}'"
            ))),
        }
    }
}

/// Render the start screen in the active locale.
pub fn render_home(i18n: &I18n) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_home(&mut out, i18n);
    out
}

/// Render the result screen for a picked stack in the active locale.
pub fn render_result(i18n: &I18n, stack: &Stack) -> String {
    let mut out = String::new();
    let _ = write_result(&mut out, i18n, stack);
    out
}

fn write_home(out: &mut impl Write, i18n: &I18n) -> fmt::Result {
    let title = t!(i18n, "title");
    writeln!(out, "{title}")?;
    writeln!(out, "{}\n", "=".repeat(title.chars().count().max(8)))?;
    writeln!(out, "{}", t!(i18n, "categories.select"))?;
    writeln!(out, "{}", t!(i18n, "categories.description"))?;
    for key in ["frontend", "backend", "database"] {
        writeln!(out, "  [x] {}", i18n.t(key))?;
    }
    writeln!(out, "\n[ {} ]", t!(i18n, "start"))
}

fn write_result(out: &mut impl Write, i18n: &I18n, stack: &Stack) -> fmt::Result {
    writeln!(out, "{}", t!(i18n, "result.title"))?;
    writeln!(out, "{}\n", t!(i18n, "result.summary"))?;
    let rows = [
        ("frontend", "result.frontend", &stack.frontend),
        ("backend", "result.backend", &stack.backend),
        ("database", "result.database", &stack.database),
    ];
    for (label, phrase, pick) in rows {
        writeln!(out, "  {}: {} {pick}", i18n.t(label), i18n.t(phrase))?;
    }
    writeln!(out, "\n{}", t!(i18n, "result.footer"))
}
