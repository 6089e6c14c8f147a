use crate::i18n::LocaleRegistry;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Bundles
    pub locales_dir: PathBuf,

    // Locale table (embedded table when unset)
    pub locale_config_path: Option<PathBuf>,

    // Startup
    pub preload_locales: bool,
    pub sample_number: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            locales_dir: std::env::var("LOCALES_DIR")
                .unwrap_or_else(|_| "locales".to_string())
                .into(),

            locale_config_path: std::env::var("LOCALE_CONFIG_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),

            preload_locales: bool_var("PRELOAD_LOCALES", true)?,

            sample_number: match std::env::var("SAMPLE_NUMBER") {
                Ok(v) => v
                    .trim()
                    .parse()
                    .with_context(|| format!("SAMPLE_NUMBER is not a number: '{}'", v))?,
                Err(_) => 1234.5,
            },
        })
    }

    /// Build the locale registry this configuration points at.
    pub fn load_registry(&self) -> Result<LocaleRegistry> {
        match &self.locale_config_path {
            Some(path) => LocaleRegistry::from_file(path)
                .with_context(|| format!("Invalid locale configuration in {}", path.display())),
            None => LocaleRegistry::builtin()
                .cloned()
                .context("Embedded locale configuration is invalid"),
        }
    }
}

fn bool_var(name: &str, default: bool) -> Result<bool> {
    let value = match std::env::var(name) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        "" => Ok(default),
        other => bail!("{} must be a boolean, got '{}'", name, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "LOCALES_DIR",
        "LOCALE_CONFIG_PATH",
        "PRELOAD_LOCALES",
        "SAMPLE_NUMBER",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert_eq!(config.locales_dir, PathBuf::from("locales"));
        assert!(config.locale_config_path.is_none());
        assert!(config.preload_locales);
        assert_eq!(config.sample_number, 1234.5);
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("LOCALES_DIR", "/srv/bundles");
        std::env::set_var("LOCALE_CONFIG_PATH", "/srv/config.json");
        std::env::set_var("PRELOAD_LOCALES", "no");
        std::env::set_var("SAMPLE_NUMBER", " 42.25 ");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.locales_dir, PathBuf::from("/srv/bundles"));
        assert_eq!(
            config.locale_config_path,
            Some(PathBuf::from("/srv/config.json"))
        );
        assert!(!config.preload_locales);
        assert_eq!(config.sample_number, 42.25);
    }

    #[test]
    #[serial]
    fn test_invalid_values() {
        clear_env();
        std::env::set_var("PRELOAD_LOCALES", "maybe");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("PRELOAD_LOCALES"));

        clear_env();
        std::env::set_var("SAMPLE_NUMBER", "lots");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("SAMPLE_NUMBER"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_config_path_uses_builtin() {
        clear_env();
        std::env::set_var("LOCALE_CONFIG_PATH", "  ");
        let config = Config::from_env().unwrap();
        clear_env();

        assert!(config.locale_config_path.is_none());
        let registry = config.load_registry().unwrap();
        assert_eq!(registry.default_locale_config().code, "en");
    }

    #[test]
    fn test_missing_config_file() {
        let config = Config {
            locales_dir: PathBuf::from("locales"),
            locale_config_path: Some(PathBuf::from("/nonexistent/config.json")),
            preload_locales: true,
            sample_number: 1.0,
        };
        let err = config.load_registry().unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/config.json"));
    }
}
