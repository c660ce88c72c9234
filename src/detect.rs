//! Geolocation-based locale detection.
//!
//! At startup the application asks an IP geolocation service which country
//! the visitor is in and switches the active locale to match. Detection is
//! best effort: it runs once in the background, and any failure leaves the
//! current locale in place.

use std::future::Future;
use std::time::Duration;

use serde_json::Value;
use tokio::task::JoinHandle;
use url::Url;

use crate::error::DetectionError;
use crate::i18n::{Locale, LocaleState};

/// Default geolocation endpoint.
pub const DEFAULT_GEOIP_URL: &str = "https://ipapi.co/json/";

/// Default timeout for the geolocation request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Source of the caller's country code.
pub trait GeoLocator {
    /// Look up the two-letter country code of the caller.
    fn country_code(&self) -> impl Future<Output = Result<String, DetectionError>> + Send;
}

/// [`GeoLocator`] backed by an ipapi.co-compatible JSON endpoint.
#[derive(Debug, Clone)]
pub struct IpApiLocator {
    client: reqwest::Client,
    url: Url,
    timeout: Duration,
}

impl IpApiLocator {
    /// Create a locator for the given endpoint.
    pub fn new(url: Url, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            timeout,
        }
    }

    /// The endpoint queried by this locator.
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

impl GeoLocator for IpApiLocator {
    async fn country_code(&self) -> Result<String, DetectionError> {
        tracing::debug!(url = %self.url, "Requesting geolocation");

        let response = self
            .client
            .get(self.url.clone())
            .header(reqwest::header::USER_AGENT, concat!("stackgen/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DetectionError::Status(status));
        }

        let body = response.bytes().await?;
        let value: Value =
            serde_json::from_slice(&body).map_err(|e| DetectionError::malformed(e.to_string()))?;

        parse_country_code(&value)
    }
}

/// Extract `country_code` from a geolocation response body.
fn parse_country_code(value: &Value) -> Result<String, DetectionError> {
    if let Some(code) = value.get("country_code").and_then(Value::as_str) {
        return Ok(code.to_string());
    }

    // ipapi.co reports rate limiting as `{"error": true, "reason": ...}`
    match value.get("reason").and_then(Value::as_str) {
        Some(reason) => Err(DetectionError::malformed(format!("missing country_code ({reason})"))),
        None => Err(DetectionError::malformed("missing country_code")),
    }
}

/// Look up the caller's country and map it to a locale.
pub async fn detect_locale<L>(locator: &L) -> Result<Locale, DetectionError>
where
    L: GeoLocator,
{
    let country_code = locator.country_code().await?;
    let locale = Locale::from_country_code(&country_code);
    tracing::debug!(country_code = %country_code, %locale, "Resolved locale from country");
    Ok(locale)
}

/// Detect the caller's locale and make it the active one.
///
/// Failures are logged and otherwise ignored; the active locale is only
/// touched when detection succeeds and yields a different locale.
pub async fn detect_and_update_locale<L>(state: &LocaleState, locator: &L)
where
    L: GeoLocator,
{
    match detect_locale(locator).await {
        Ok(locale) => {
            if !state.set(locale) {
                tracing::debug!(%locale, "Detected locale already active");
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, timeout = e.is_timeout(), "Failed to detect locale");
        }
    }
}

/// Run [`detect_and_update_locale`] as a background task.
///
/// The handle may be dropped; the task never fails.
pub fn spawn_detection<L>(state: LocaleState, locator: L) -> JoinHandle<()>
where
    L: GeoLocator + Send + Sync + 'static,
{
    tokio::spawn(async move {
        detect_and_update_locale(&state, &locator).await;
    })
}
