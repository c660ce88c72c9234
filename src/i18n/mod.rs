//! Internationalization (i18n) support for the Tech Stack Generator.
//!
//! The message catalog is embedded in the binary as one JSON translation
//! tree per locale. The active locale lives in a [`LocaleState`] cell that
//! renderers subscribe to, so a later locale switch (for example from
//! [`crate::detect`]) re-renders every view.
//!
//! # Usage
//!
//! ```rust,ignore
//! use stackgen::i18n::{I18n, LocaleState};
//! use stackgen::t;
//!
//! let i18n = I18n::new(LocaleState::default());
//!
//! let title = t!(i18n, "title");
//! let footer = t!(i18n, "result.footer");
//! ```

mod catalog;
mod locales;
mod state;

pub use catalog::{Catalog, TranslationTree};
pub use locales::{Locale, SUPPORTED_LOCALES, normalize_locale};
pub use state::LocaleState;

use tokio::sync::watch;

/// Localization provider handed to the UI layer.
///
/// Pairs the immutable catalog with the shared active-locale cell.
#[derive(Debug, Clone)]
pub struct I18n {
    catalog: &'static Catalog,
    state: LocaleState,
}

impl I18n {
    /// Create a provider over the built-in catalog.
    pub fn new(state: LocaleState) -> Self {
        Self::with_catalog(Catalog::builtin(), state)
    }

    /// Create a provider over a specific catalog.
    pub const fn with_catalog(catalog: &'static Catalog, state: LocaleState) -> Self {
        Self { catalog, state }
    }

    /// Translate a dotted key path in the active locale.
    ///
    /// Prefer using the `t!()` macro for ergonomic access.
    pub fn t(&self, key_path: &str) -> String {
        self.catalog.translate(Some(self.state.get()), key_path)
    }

    /// The active locale.
    pub fn locale(&self) -> Locale {
        self.state.get()
    }

    /// The fallback locale.
    pub const fn fallback_locale(&self) -> Locale {
        self.state.fallback()
    }

    /// Handle to the active-locale cell.
    pub const fn state(&self) -> &LocaleState {
        &self.state
    }

    /// The catalog backing this provider.
    pub const fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Subscribe to active-locale changes.
    pub fn subscribe(&self) -> watch::Receiver<Locale> {
        self.state.subscribe()
    }
}

/// Translation macro for convenient access to localized strings.
///
/// # Examples
///
/// ```rust,ignore
/// let msg = t!(i18n, "result.summary");
/// ```
#[macro_export]
macro_rules! t {
    ($i18n:expr, $key:expr) => {
        $i18n.t($key)
    };
}
