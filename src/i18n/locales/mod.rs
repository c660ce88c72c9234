//! Supported locales and locale tag parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::error::{Error, Result};

/// Embedded catalog resources, one per locale.
pub(crate) const EN_JSON: &str = include_str!("en.json");
pub(crate) const ZH_JSON: &str = include_str!("zh.json");
pub(crate) const JA_JSON: &str = include_str!("ja.json");

/// List of supported locale codes.
pub const SUPPORTED_LOCALES: &[&str] = &["en", "zh", "ja"];

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English. Also the fallback locale.
    En,
    /// Chinese.
    Zh,
    /// Japanese.
    Ja,
}

impl Locale {
    /// All supported locales, fallback first.
    pub const ALL: [Self; 3] = [Self::En, Self::Zh, Self::Ja];

    /// Locale used for keys missing from the active locale.
    pub const FALLBACK: Self = Self::En;

    /// Locale active before detection has run.
    pub const INITIAL: Self = Self::Zh;

    /// Short language code (`en`, `zh`, `ja`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
            Self::Ja => "ja",
        }
    }

    /// Name of the language in that language.
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "中文",
            Self::Ja => "日本語",
        }
    }

    /// Map a two-letter country code to the locale shown to visitors from
    /// that country.
    ///
    /// Matching is case-insensitive but otherwise exact, so surrounding
    /// whitespace makes a code unrecognized. Japan maps to Japanese; mainland
    /// China, Taiwan and Hong Kong map to Chinese; everything else, including
    /// an empty or unrecognized code, maps to English.
    pub fn from_country_code(country_code: &str) -> Self {
        let code = country_code.to_ascii_lowercase();
        match code.as_str() {
            "jp" => Self::Ja,
            "cn" | "tw" | "hk" => Self::Zh,
            _ => Self::En,
        }
    }

    pub(crate) const fn resource(self) -> &'static str {
        match self {
            Self::En => EN_JSON,
            Self::Zh => ZH_JSON,
            Self::Ja => JA_JSON,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    /// Parse a locale tag such as `ja`, `zh-TW` or `en_US.UTF-8`.
    ///
    /// Only the language subtag is considered.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = normalize_locale(s.trim());
        if normalized.is_empty() {
            return Err(Error::UnsupportedLocale(s.to_string()));
        }

        let langid: LanguageIdentifier =
            normalized.parse().map_err(|_| Error::UnsupportedLocale(s.to_string()))?;

        match langid.language.as_str() {
            "en" => Ok(Self::En),
            "zh" => Ok(Self::Zh),
            "ja" => Ok(Self::Ja),
            _ => Err(Error::UnsupportedLocale(s.to_string())),
        }
    }
}

/// Normalize a locale string to BCP 47 format.
///
/// Examples:
/// - "`en_US.UTF-8`" -> "en-US"
/// - "`zh_TW`" -> "zh-TW"
/// - "ja" -> "ja"
pub fn normalize_locale(locale: &str) -> String {
    // Remove encoding suffix (e.g., ".UTF-8") and modifiers (e.g., "@euro")
    let locale = locale.split(['.', '@']).next().unwrap_or(locale);

    locale.replace('_', "-")
}
