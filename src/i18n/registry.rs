//! Locale registry: single source of truth for all configured locales.
//!
//! The registry is an ordered, immutable table of [`LocaleConfig`] records.
//! It is validated once when built, so every query afterwards is infallible.
//! A process-wide instance built from the embedded configuration is available
//! through [`LocaleRegistry::builtin`].

use crate::i18n::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

/// Locale table shipped with the crate.
const BUILTIN_CONFIG: &str = include_str!("../../locales/config.json");

/// Text direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

/// Configuration for a supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    /// Language code, the primary key (e.g., "en", "fr", "zh-cn")
    pub code: String,

    /// Name of the language in that language (e.g., "Français")
    pub local_name: String,

    /// Name of the language in English (e.g., "French")
    pub name: String,

    /// Text direction
    pub lang_dir: TextDirection,

    /// Date format hint (e.g., "MM/DD/YYYY")
    pub date_format: String,

    /// RFC 5646 hreflang value, may differ from `code` (e.g., "en-GB")
    pub hreflang: String,

    /// Whether the locale is offered to users
    pub enabled: bool,

    /// Whether this is the default locale (exactly one must be)
    #[serde(rename = "default")]
    pub is_default: bool,
}

impl LocaleConfig {
    /// Check if text in this locale runs right to left.
    pub fn is_rtl(&self) -> bool {
        self.lang_dir == TextDirection::Rtl
    }
}

/// Immutable table of locale configurations.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
    default_index: usize,
}

/// Registry built from the embedded configuration (initialized lazily)
static BUILTIN: OnceLock<Result<LocaleRegistry, ConfigurationError>> = OnceLock::new();

impl LocaleRegistry {
    /// Build a registry from an ordered list of configurations.
    ///
    /// # Errors
    /// Returns a [`ConfigurationError`] if no locale or more than one locale is
    /// marked as default, if a code is empty, or if a code appears twice.
    pub fn new(locales: Vec<LocaleConfig>) -> Result<Self, ConfigurationError> {
        let mut seen = HashSet::new();
        for locale in &locales {
            if locale.code.is_empty() {
                return Err(ConfigurationError::EmptyLocaleCode);
            }
            if !seen.insert(locale.code.as_str()) {
                return Err(ConfigurationError::DuplicateLocaleCode(
                    locale.code.clone(),
                ));
            }
        }

        let defaults: Vec<usize> = locales
            .iter()
            .enumerate()
            .filter(|(_, locale)| locale.is_default)
            .map(|(index, _)| index)
            .collect();

        let default_index = match defaults.as_slice() {
            [] => return Err(ConfigurationError::NoDefaultLocale),
            [index] => *index,
            _ => {
                return Err(ConfigurationError::MultipleDefaultLocales(
                    defaults
                        .iter()
                        .map(|&index| locales[index].code.clone())
                        .collect(),
                ))
            }
        };

        Ok(Self {
            locales,
            default_index,
        })
    }

    /// Build a registry from a JSON array of locale configurations.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let locales: Vec<LocaleConfig> =
            serde_json::from_str(json).map_err(|e| ConfigurationError::Parse(e.to_string()))?;
        Self::new(locales)
    }

    /// Build a registry from a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ConfigurationError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// Get the registry built from the embedded configuration.
    ///
    /// The embedded table is parsed and validated on first call; later calls
    /// return the same instance (or the same error).
    pub fn builtin() -> Result<&'static LocaleRegistry, ConfigurationError> {
        BUILTIN
            .get_or_init(|| Self::from_json(BUILTIN_CONFIG))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Get the default locale configuration.
    pub fn default_locale_config(&self) -> &LocaleConfig {
        &self.locales[self.default_index]
    }

    /// Get a locale configuration by its exact code.
    pub fn locale_config(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all enabled locales, in declaration order.
    pub fn enabled_locale_configs(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Get the codes of all locales (enabled or not), in declaration order.
    pub fn supported_language_codes(&self) -> Vec<&str> {
        self.locales.iter().map(|locale| locale.code.as_str()).collect()
    }

    /// Check if a locale with this code is configured, enabled or not.
    pub fn is_locale_supported(&self, code: &str) -> bool {
        self.locale_config(code).is_some()
    }

    /// Check if a locale with this code is configured and enabled.
    pub fn is_locale_enabled(&self, code: &str) -> bool {
        self.locale_config(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }

    /// Iterate over all configured locales in table order.
    pub fn iter(&self) -> impl Iterator<Item = &LocaleConfig> {
        self.locales.iter()
    }

    /// Get the number of configured locales, enabled or not.
    ///
    /// # Returns
    /// Never 0 for a registry that passed validation
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn test_config(code: &str, enabled: bool, is_default: bool) -> LocaleConfig {
    LocaleConfig {
        code: code.to_string(),
        local_name: code.to_uppercase(),
        name: code.to_uppercase(),
        lang_dir: TextDirection::Ltr,
        date_format: "YYYY-MM-DD".to_string(),
        hreflang: code.to_string(),
        enabled,
        is_default,
    }
}
