//! Bundle sources: where message bundles come from.
//!
//! The loader only knows the [`BundleSource`] trait. Bundles are resolved
//! purely by locale code, either from `<root>/<code>.json` on disk
//! ([`FsBundleSource`]) or from JSON held in memory ([`StaticBundleSource`]).

use crate::i18n::{BundleLoadError, Locale};
use std::collections::HashMap;
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Produces the message bundle for a locale code.
pub trait BundleSource: Send + Sync {
    /// Load the bundle for `code`.
    ///
    /// Implementations must not cache; caching is the loader's job.
    fn load(&self, code: &str) -> impl Future<Output = Result<Locale, BundleLoadError>> + Send;
}

impl<S: BundleSource> BundleSource for Arc<S> {
    fn load(&self, code: &str) -> impl Future<Output = Result<Locale, BundleLoadError>> + Send {
        (**self).load(code)
    }
}

/// Only plain tag characters may become part of a file name.
fn is_valid_bundle_name(code: &str) -> bool {
    !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Reads bundles from `<root>/<code>.json`.
#[derive(Debug, Clone)]
pub struct FsBundleSource {
    root: PathBuf,
}

impl FsBundleSource {
    /// Create a source reading `<root>/<code>.json`.
    ///
    /// # Arguments
    /// * `root` - Directory holding one JSON bundle per locale code
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory bundles are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the bundle file for `code`.
    ///
    /// Codes that could escape the root directory (separators, dots) are
    /// rejected before touching the file system.
    pub fn bundle_path(&self, code: &str) -> Result<PathBuf, BundleLoadError> {
        if !is_valid_bundle_name(code) {
            return Err(BundleLoadError::InvalidCode {
                code: code.to_string(),
            });
        }
        Ok(self.root.join(format!("{}.json", code)))
    }
}

impl BundleSource for FsBundleSource {
    fn load(&self, code: &str) -> impl Future<Output = Result<Locale, BundleLoadError>> + Send {
        let path = self.bundle_path(code);
        let code = code.to_string();

        async move {
            let path = path?;
            debug!("Reading message bundle {}", path.display());

            let json = match tokio::fs::read_to_string(&path).await {
                Ok(json) => json,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    return Err(BundleLoadError::NotFound { code });
                }
                Err(source) => return Err(BundleLoadError::Io { code, source }),
            };

            Locale::from_json(&json).map_err(|source| BundleLoadError::Parse { code, source })
        }
    }
}

/// Serves bundles from JSON text held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticBundleSource {
    bundles: HashMap<String, String>,
}

impl StaticBundleSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundles embedded in the binary, matching the builtin registry.
    pub fn builtin() -> Self {
        Self::new()
            .with_bundle("en", include_str!("../../locales/en.json"))
            .with_bundle("fr", include_str!("../../locales/fr.json"))
            .with_bundle("de", include_str!("../../locales/de.json"))
    }

    /// Add (or replace) the JSON text served for `code`.
    pub fn with_bundle(mut self, code: impl Into<String>, json: impl Into<String>) -> Self {
        self.bundles.insert(code.into(), json.into());
        self
    }
}

impl BundleSource for StaticBundleSource {
    fn load(&self, code: &str) -> impl Future<Output = Result<Locale, BundleLoadError>> + Send {
        let result = match self.bundles.get(code) {
            Some(json) => Locale::from_json(json).map_err(|source| BundleLoadError::Parse {
                code: code.to_string(),
                source,
            }),
            None => Err(BundleLoadError::NotFound {
                code: code.to_string(),
            }),
        };
        std::future::ready(result)
    }
}
