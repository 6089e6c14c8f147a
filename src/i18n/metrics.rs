//! Loader metrics and observability.
//!
//! Counters for cache behavior, bundle source calls and fallbacks. Each
//! [`LocaleLoader`](crate::i18n::LocaleLoader) owns its own set so separate
//! loaders (and tests) never share counts.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for one loader.
#[derive(Debug, Default)]
pub struct LoaderMetrics {
    /// Number of lookups answered from the locale cache
    cache_hits: AtomicUsize,

    /// Number of lookups that had to go to the bundle source
    cache_misses: AtomicUsize,

    /// Number of calls made to the bundle source
    bundle_loads: AtomicUsize,

    /// Number of bundle source calls that failed
    bundle_load_failures: AtomicUsize,

    /// Number of times a failed load was answered with the default locale
    load_fallbacks: AtomicUsize,

    /// Number of times number formatting fell back to the default locale
    format_fallbacks: AtomicUsize,
}

impl LoaderMetrics {
    /// Create a zeroed set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lookup answered from the cache.
    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that missed the cache.
    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a call to the bundle source.
    pub fn record_bundle_load(&self) {
        self.bundle_loads.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed bundle source call.
    pub fn record_bundle_load_failure(&self) {
        self.bundle_load_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a load answered with the default locale instead.
    ///
    /// Every call matches one fallback warning in the logs.
    pub fn record_load_fallback(&self) {
        self.load_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record number formatting redone with the default locale.
    pub fn record_format_fallback(&self) {
        self.format_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Get cache hits so far.
    pub fn cache_hits(&self) -> usize {
        self.cache_hits.load(Ordering::Relaxed)
    }

    /// Get cache misses so far.
    pub fn cache_misses(&self) -> usize {
        self.cache_misses.load(Ordering::Relaxed)
    }

    /// Get bundle source calls so far, failed ones included.
    pub fn bundle_loads(&self) -> usize {
        self.bundle_loads.load(Ordering::Relaxed)
    }

    /// Get failed bundle source calls so far.
    pub fn bundle_load_failures(&self) -> usize {
        self.bundle_load_failures.load(Ordering::Relaxed)
    }

    /// Get load fallbacks to the default locale so far.
    pub fn load_fallbacks(&self) -> usize {
        self.load_fallbacks.load(Ordering::Relaxed)
    }

    /// Get formatting fallbacks to the default locale so far.
    pub fn format_fallbacks(&self) -> usize {
        self.format_fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.cache_hits();
        let misses = self.cache_misses();
        let total_lookups = hits + misses;
        let cache_hit_rate = if total_lookups > 0 {
            (hits as f64 / total_lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            cache_hits: hits,
            cache_misses: misses,
            cache_hit_rate,
            bundle_loads: self.bundle_loads(),
            bundle_load_failures: self.bundle_load_failures(),
            load_fallbacks: self.load_fallbacks(),
            format_fallbacks: self.format_fallbacks(),
        }
    }
}

/// Snapshot of loader statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub cache_hits: usize,
    pub cache_misses: usize,

    /// Cache hit rate as a percentage (0-100)
    pub cache_hit_rate: f64,

    pub bundle_loads: usize,
    pub bundle_load_failures: usize,
    pub load_fallbacks: usize,
    pub format_fallbacks: usize,
}
