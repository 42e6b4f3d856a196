//! Runtime configuration.
//!
//! Everything has a default; the environment only overrides.

use std::{env, path::PathBuf, str::FromStr};

use thiserror::Error;

use crate::query_actor::DEFAULT_BUFFER;

pub const DB_PATH_ENV: &str = "CATALOG_DB_PATH";
pub const SEED_PRODUCTS_ENV: &str = "CATALOG_SEED_PRODUCTS";
pub const CHANNEL_BUFFER_ENV: &str = "CATALOG_CHANNEL_BUFFER";
pub const PAGE_SIZE_ENV: &str = "CATALOG_PAGE_SIZE";

pub const DEFAULT_SEED_PRODUCTS: usize = 120;
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Geometry and paging of the product table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    /// Rows requested per fetch.
    pub page_size: u32,
    /// Fixed height of one row, in pixels.
    pub row_height: f64,
    pub viewport_height: f64,
    /// Rows rendered beyond each edge of the viewport.
    pub overscan: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            row_height: 50.0,
            viewport_height: 600.0,
            overscan: 10,
        }
    }
}

/// Process-level settings.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Sqlite file to serve from. `None` means an in-memory demo store.
    pub db_path: Option<PathBuf>,
    /// Demo products seeded into an empty store.
    pub seed_products: usize,
    pub channel_buffer: usize,
    pub table: TableConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            seed_products: DEFAULT_SEED_PRODUCTS,
            channel_buffer: DEFAULT_BUFFER,
            table: TableConfig::default(),
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let channel_buffer = parse_var(&lookup, CHANNEL_BUFFER_ENV)?.unwrap_or(defaults.channel_buffer);
        let page_size = parse_var(&lookup, PAGE_SIZE_ENV)?.unwrap_or(defaults.table.page_size);

        // tokio rejects a zero-capacity mailbox, and a zero page never ends the scroll
        if channel_buffer == 0 {
            return Err(invalid(CHANNEL_BUFFER_ENV, "0"));
        }
        if page_size == 0 {
            return Err(invalid(PAGE_SIZE_ENV, "0"));
        }

        Ok(Self {
            db_path: lookup(DB_PATH_ENV).filter(|p| !p.is_empty()).map(PathBuf::from),
            seed_products: parse_var(&lookup, SEED_PRODUCTS_ENV)?.unwrap_or(defaults.seed_products),
            channel_buffer,
            table: TableConfig {
                page_size,
                ..defaults.table
            },
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| invalid(key, &raw)),
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = CatalogConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.table.page_size, 50);
        assert_eq!(config.channel_buffer, 32);
        assert_eq!(config.seed_products, 120);
    }

    #[test]
    fn test_overrides_from_env() {
        let config = CatalogConfig::from_lookup(lookup_from(&[
            (DB_PATH_ENV, "/tmp/catalog.db"),
            (SEED_PRODUCTS_ENV, "500"),
            (CHANNEL_BUFFER_ENV, "8"),
            (PAGE_SIZE_ENV, " 25 "),
        ]))
        .unwrap();
        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/catalog.db")));
        assert_eq!(config.seed_products, 500);
        assert_eq!(config.channel_buffer, 8);
        assert_eq!(config.table.page_size, 25);
        assert_eq!(config.table.row_height, 50.0);
    }

    #[test]
    fn test_rejects_bad_values() {
        for (key, value) in [
            (PAGE_SIZE_ENV, "-3"),
            (PAGE_SIZE_ENV, "0"),
            (CHANNEL_BUFFER_ENV, "lots"),
            (CHANNEL_BUFFER_ENV, "0"),
            (SEED_PRODUCTS_ENV, "1.5"),
        ] {
            let err = CatalogConfig::from_lookup(lookup_from(&[(key, value)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { key: ref k, .. } if k == key));
        }
    }
}
