//! Active locale state.

use std::sync::Arc;

use tokio::sync::watch;

use super::locales::Locale;

/// Shared, observable cell holding the active locale.
///
/// Cloning yields another handle to the same cell. Readers either poll
/// [`LocaleState::get`] or [`subscribe`](LocaleState::subscribe) to be woken
/// when the value changes. Setting the value it already holds is a no-op and
/// wakes nobody.
#[derive(Debug, Clone)]
pub struct LocaleState {
    tx: Arc<watch::Sender<Locale>>,
}

impl LocaleState {
    /// Create a new cell with the given initial locale.
    pub fn new(initial: Locale) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// The currently active locale.
    pub fn get(&self) -> Locale {
        *self.tx.borrow()
    }

    /// The locale used for keys missing from the active locale.
    pub const fn fallback(&self) -> Locale {
        Locale::FALLBACK
    }

    /// Switch the active locale.
    ///
    /// Returns `true` if the value changed and subscribers were notified.
    pub fn set(&self, locale: Locale) -> bool {
        let mut previous = None;
        let changed = self.tx.send_if_modified(|current| {
            if *current == locale {
                return false;
            }
            previous = Some(*current);
            *current = locale;
            true
        });

        if let Some(previous) = previous {
            tracing::info!(from = %previous, to = %locale, "Active locale changed");
        }
        changed
    }

    /// Subscribe to locale changes.
    ///
    /// The returned receiver sees the current value as already seen.
    pub fn subscribe(&self) -> watch::Receiver<Locale> {
        self.tx.subscribe()
    }
}

impl Default for LocaleState {
    fn default() -> Self {
        Self::new(Locale::INITIAL)
    }
}
