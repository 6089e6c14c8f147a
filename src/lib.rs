//! Locale registry and message bundle loader.
//!
//! See [`i18n`] for the locale table, the caching loader and number
//! formatting. [`config`] holds the environment-driven settings used by the
//! `locale-loader` binary.

pub mod config;
pub mod i18n;
