//! Internationalization (i18n) module: locale resolution and loading.
//!
//! # Architecture
//!
//! - `registry`: Immutable table of configured locales, validated on load
//! - `loader`: Resolves codes to message bundles with caching and fallback
//! - `source`: Where bundles come from (file system, embedded JSON)
//! - `locale`: The loaded message bundle type
//! - `number`: Locale-aware number formatting (CLDR data via ICU4X)
//! - `metrics`: Per-loader cache and fallback counters
//! - `error`: Error taxonomy
//!
//! # Example
//!
//! ```rust,no_run
//! use locale_loader::i18n::{FsBundleSource, LocaleLoader, LocaleRegistry};
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Arc::new(LocaleRegistry::from_file("locales/config.json")?);
//! let loader = LocaleLoader::new(registry, FsBundleSource::new("locales"));
//!
//! // Falls back to the default locale if "fr" cannot be loaded
//! let french = loader.import_locale("fr").await?;
//! println!("{:?}", french.message("nav.home"));
//!
//! let formatted = loader.format_number("fr", 1234.5, None)?;
//! # Ok(())
//! # }
//! ```

mod error;
mod loader;
mod locale;
mod metrics;
pub mod number;
mod registry;
mod source;

pub use error::{BundleLoadError, ConfigurationError, FormatError, I18nError};
pub use loader::LocaleLoader;
pub use locale::Locale;
pub use metrics::{LoaderMetrics, MetricsReport};
pub use number::{format_number, NumberFormatOptions};
pub use registry::{LocaleConfig, LocaleRegistry, TextDirection};
pub use source::{BundleSource, FsBundleSource, StaticBundleSource};
