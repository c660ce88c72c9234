//! Error types for stackgen.
//!
//! The crate-level [`Error`] covers configuration, catalog and CLI failures
//! and maps each kind to a process exit code. Locale detection has its own
//! single error kind, [`DetectionError`], which the resolver absorbs.

use std::io;
use thiserror::Error;

/// Crate-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (invalid config file, bad override value).
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file operations, etc.).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Locale tag that does not name one of the supported locales.
    #[error("Unsupported locale '{0}'. Supported locales: en, zh, ja")]
    UnsupportedLocale(String),

    /// Message catalog is inconsistent across locales.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Locale detection failed.
    #[error("Locale detection failed: {0}")]
    Detection(#[from] DetectionError),

    /// General/unspecified error.
    #[error("{0}")]
    Other(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a geolocation-based locale lookup.
///
/// This is the only error the resolver can encounter. It never leaves
/// [`crate::detect::detect_and_update_locale`]; it is logged and dropped.
#[derive(Debug, Error)]
pub enum DetectionError {
    /// Transport failure, including timeouts.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    /// The response body did not carry a usable `country_code`.
    #[error("malformed response: {0}")]
    MalformedBody(String),
}

impl DetectionError {
    /// Create a malformed-body error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedBody(msg.into())
    }

    /// Returns true if the lookup gave up because of its timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }
}

impl Error {
    /// Returns the exit code for this error type.
    ///
    /// - 1: General error
    /// - 2: Invalid arguments or configuration
    /// - 10: Network error (locale detection)
    /// - 11: Inconsistent catalog
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::InvalidArgument(_) | Self::UnsupportedLocale(_) => 2,
            Self::Io(_) | Self::Detection(_) => 10,
            Self::Catalog(_) => 11,
            Self::Json(_) | Self::Yaml(_) | Self::Other(_) => 1,
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a catalog error.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a general error.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
