use anyhow::Result;
use locale_loader::config::Config;
use locale_loader::i18n::{FsBundleSource, LocaleLoader};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when not present)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_loader=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let registry = Arc::new(config.load_registry()?);
    info!(
        "Loaded {} locales, default locale '{}'",
        registry.len(),
        registry.default_locale_config().code
    );

    info!("Reading message bundles from {}", config.locales_dir.display());
    let loader = LocaleLoader::new(registry, FsBundleSource::new(config.locales_dir.clone()));

    if config.preload_locales {
        loader.preload_enabled_locales().await?;
    }

    // Codes given on the command line, or every enabled locale
    let requested: Vec<String> = std::env::args().skip(1).collect();
    let codes: Vec<String> = if requested.is_empty() {
        loader
            .registry()
            .enabled_locale_configs()
            .into_iter()
            .map(|config| config.code.clone())
            .collect()
    } else {
        requested
    };

    for code in &codes {
        let locale = loader.import_locale(code).await?;
        let sample = loader.format_number(code, config.sample_number, None)?;
        let name = loader
            .registry()
            .locale_config(code)
            .map(|config| config.local_name.as_str())
            .unwrap_or("-");

        println!(
            "{:<8} {:<12} enabled={:<5} messages={:<4} sample={}",
            code,
            name,
            loader.registry().is_locale_enabled(code),
            locale.len(),
            sample
        );
    }

    let report = loader.metrics().report();
    info!("Loader metrics: {}", serde_json::to_string(&report)?);

    Ok(())
}
