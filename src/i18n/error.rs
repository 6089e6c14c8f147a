//! Error types for locale configuration, bundle loading and number formatting.

use thiserror::Error;

/// The locale table itself is unusable.
///
/// There is no fallback for these: without a valid table there is no default
/// locale to fall back to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("no default locale configured")]
    NoDefaultLocale,

    #[error("multiple default locales configured: {}", .0.join(", "))]
    MultipleDefaultLocales(Vec<String>),

    #[error("duplicate locale code '{0}'")]
    DuplicateLocaleCode(String),

    #[error("locale configuration contains an empty code")]
    EmptyLocaleCode,

    #[error("invalid locale configuration: {0}")]
    Parse(String),

    #[error("failed to read locale configuration from {path}: {reason}")]
    Read { path: String, reason: String },
}

/// A single code's message bundle could not be produced by a bundle source.
#[derive(Debug, Error)]
pub enum BundleLoadError {
    #[error("no message bundle found for locale '{code}'")]
    NotFound { code: String },

    #[error("'{code}' cannot be used as a bundle name")]
    InvalidCode { code: String },

    #[error("failed to read message bundle for locale '{code}': {source}")]
    Io {
        code: String,
        #[source]
        source: std::io::Error,
    },

    #[error("message bundle for locale '{code}' is not a valid JSON object: {source}")]
    Parse {
        code: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to load message bundle for locale '{code}': {message}")]
    Other { code: String, message: String },
}

impl BundleLoadError {
    /// Code of the bundle that failed to load.
    pub fn code(&self) -> &str {
        match self {
            BundleLoadError::NotFound { code }
            | BundleLoadError::InvalidCode { code }
            | BundleLoadError::Io { code, .. }
            | BundleLoadError::Parse { code, .. }
            | BundleLoadError::Other { code, .. } => code,
        }
    }
}

/// Number formatting failed for a locale identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("'{code}' is not a valid locale identifier: {reason}")]
    InvalidIdentifier { code: String, reason: String },

    #[error("no number formatting conventions for locale '{code}'")]
    UnsupportedLocale { code: String },

    #[error("invalid number format options: {0}")]
    InvalidOptions(String),

    #[error("'{value}' cannot be represented as a decimal: {reason}")]
    InvalidNumber { value: String, reason: String },
}

/// Errors surfaced to callers of the loader.
///
/// Everything here is fatal for the requested operation. Recoverable failures
/// are handled by falling back to the default locale and only show up in logs.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("failed to load default locale '{code}': {source}")]
    DefaultLocaleUnavailable {
        code: String,
        #[source]
        source: BundleLoadError,
    },

    #[error(transparent)]
    Format(#[from] FormatError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_multiple_defaults_lists_codes() {
        let err = ConfigurationError::MultipleDefaultLocales(vec!["en".into(), "fr".into()]);
        assert_eq!(
            err.to_string(),
            "multiple default locales configured: en, fr"
        );
    }

    #[test]
    fn test_bundle_load_error_code() {
        let err = BundleLoadError::NotFound {
            code: "fr".to_string(),
        };
        assert_eq!(err.code(), "fr");

        let err = BundleLoadError::Other {
            code: "de".to_string(),
            message: "timeout".to_string(),
        };
        assert_eq!(err.code(), "de");
    }

    #[test]
    fn test_default_unavailable_keeps_cause() {
        let err = I18nError::DefaultLocaleUnavailable {
            code: "en".to_string(),
            source: BundleLoadError::NotFound {
                code: "en".to_string(),
            },
        };

        let message = err.to_string();
        assert!(message.contains("default locale 'en'"));
        assert!(message.contains("no message bundle found"));

        let source = err.source().expect("cause should be preserved");
        assert!(source.to_string().contains("'en'"));
    }

    #[test]
    fn test_configuration_error_converts() {
        let err: I18nError = ConfigurationError::NoDefaultLocale.into();
        assert!(matches!(
            err,
            I18nError::Configuration(ConfigurationError::NoDefaultLocale)
        ));
        assert_eq!(err.to_string(), "no default locale configured");
    }
}
