//! Locale loader: resolves locale codes to cached message bundles.
//!
//! A [`LocaleLoader`] owns its cache, so independent loaders never see each
//! other's bundles. Failed loads fall back to the registry's default locale
//! exactly once; a failure of the default locale itself is fatal.
//!
//! The cache lock is never held across an `.await`. Two tasks importing the
//! same uncached code at the same time may both hit the bundle source; both
//! results are valid bundles for that code and the last write wins.

use crate::i18n::number::{self, NumberFormatOptions};
use crate::i18n::{
    BundleLoadError, BundleSource, ConfigurationError, I18nError, Locale, LoaderMetrics,
    LocaleRegistry, StaticBundleSource,
};
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

/// Loads, caches and falls back between locale bundles.
pub struct LocaleLoader<S> {
    registry: Arc<LocaleRegistry>,
    source: S,
    cache: RwLock<HashMap<String, Arc<Locale>>>,
    metrics: LoaderMetrics,
}

impl LocaleLoader<StaticBundleSource> {
    /// Loader over the embedded locale table and bundles.
    pub fn builtin() -> Result<Self, ConfigurationError> {
        let registry = LocaleRegistry::builtin()?.clone();
        Ok(Self::new(Arc::new(registry), StaticBundleSource::builtin()))
    }
}

impl<S: BundleSource> LocaleLoader<S> {
    /// Create a loader with an empty cache.
    ///
    /// # Arguments
    /// * `registry` - Locale table; its default locale is the fallback target
    /// * `source` - Where bundles are fetched from on a cache miss
    pub fn new(registry: Arc<LocaleRegistry>, source: S) -> Self {
        Self {
            registry,
            source,
            cache: RwLock::new(HashMap::new()),
            metrics: LoaderMetrics::new(),
        }
    }

    /// The locale table this loader resolves against.
    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// The bundle source behind the cache.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Cache and fallback counters for this loader.
    pub fn metrics(&self) -> &LoaderMetrics {
        &self.metrics
    }

    fn default_code(&self) -> &str {
        &self.registry.default_locale_config().code
    }

    fn cached(&self, code: &str) -> Option<Arc<Locale>> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(code)
            .cloned()
    }

    /// Check whether a bundle for `code` is currently cached.
    pub fn is_cached(&self, code: &str) -> bool {
        self.cached(code).is_some()
    }

    /// Codes with a cached bundle, sorted.
    pub fn cached_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        codes.sort();
        codes
    }

    /// Cached bundle for `code`, or a fresh one from the source.
    async fn resolve(&self, code: &str) -> Result<Arc<Locale>, BundleLoadError> {
        if let Some(locale) = self.cached(code) {
            debug!("Locale '{}' served from cache", code);
            self.metrics.record_cache_hit();
            return Ok(locale);
        }
        self.metrics.record_cache_miss();

        debug!("Loading locale '{}' from bundle source", code);
        self.metrics.record_bundle_load();
        match self.source.load(code).await {
            Ok(locale) => {
                let locale = Arc::new(locale);
                self.cache
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(code.to_string(), Arc::clone(&locale));
                Ok(locale)
            }
            Err(e) => {
                self.metrics.record_bundle_load_failure();
                Err(e)
            }
        }
    }

    /// Get the message bundle for `code`.
    ///
    /// Cached bundles are returned without contacting the source. If `code`
    /// cannot be loaded, the default locale's bundle is returned instead and a
    /// warning is logged. Whether the locale is enabled does not matter here.
    ///
    /// # Errors
    /// Returns [`I18nError::DefaultLocaleUnavailable`] if the default locale's
    /// bundle cannot be loaded, either requested directly or as the fallback.
    pub async fn import_locale(&self, code: &str) -> Result<Arc<Locale>, I18nError> {
        let error = match self.resolve(code).await {
            Ok(locale) => return Ok(locale),
            Err(e) => e,
        };

        let default_code = self.default_code();
        if code == default_code {
            return Err(I18nError::DefaultLocaleUnavailable {
                code: default_code.to_string(),
                source: error,
            });
        }

        warn!(
            "Failed to load locale '{}', falling back to default locale '{}': {}",
            code, default_code, error
        );
        self.metrics.record_load_fallback();

        self.resolve(default_code)
            .await
            .map_err(|source| I18nError::DefaultLocaleUnavailable {
                code: default_code.to_string(),
                source,
            })
    }

    /// Load `code` into the cache ahead of use.
    pub async fn preload_locale(&self, code: &str) -> Result<(), I18nError> {
        self.import_locale(code).await.map(|_| ())
    }

    /// Load every enabled locale concurrently.
    ///
    /// All loads run to completion before this returns. Non-default failures
    /// fall back like [`import_locale`](Self::import_locale) does; if the
    /// default locale cannot be loaded, the first such error (in registry
    /// order) is returned.
    pub async fn preload_enabled_locales(&self) -> Result<(), I18nError> {
        let codes: Vec<&str> = self
            .registry
            .enabled_locale_configs()
            .into_iter()
            .map(|config| config.code.as_str())
            .collect();

        let results = join_all(codes.iter().map(|code| self.preload_locale(code))).await;

        let loaded = results.iter().filter(|result| result.is_ok()).count();
        info!("Preloaded {}/{} enabled locales", loaded, codes.len());

        results.into_iter().collect()
    }

    /// Evict cached bundles.
    ///
    /// With a non-blank `code` only that entry is removed; with `None` or a
    /// blank code the whole cache is cleared.
    pub fn clear_locale_cache(&self, code: Option<&str>) {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        match code {
            Some(code) if !code.trim().is_empty() => {
                if cache.remove(code).is_some() {
                    debug!("Evicted locale '{}' from cache", code);
                }
            }
            _ => {
                debug!("Clearing {} cached locales", cache.len());
                cache.clear();
            }
        }
    }

    /// Format `number` for locale `code`.
    ///
    /// If `code` cannot be used for formatting, a warning is logged and the
    /// default locale is used instead. The bundle cache is not involved.
    ///
    /// # Errors
    /// Returns [`I18nError::Format`] if formatting with the default locale
    /// fails as well.
    pub fn format_number(
        &self,
        code: &str,
        number: f64,
        options: Option<&NumberFormatOptions>,
    ) -> Result<String, I18nError> {
        match number::format_number(code, number, options) {
            Ok(formatted) => Ok(formatted),
            Err(error) => {
                let default_code = self.default_code();
                warn!(
                    "Could not format number with locale '{}', falling back to default '{}': {}",
                    code, default_code, error
                );
                self.metrics.record_format_fallback();

                Ok(number::format_number(default_code, number, options)?)
            }
        }
    }
}
