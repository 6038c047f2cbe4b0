use std::env;

use crate::error::ConfigError;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Page size used when a list request gives no `limit`
    pub default_page_size: i64,
    /// Upper bound applied to any requested `limit`
    pub max_page_size: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let config = Self {
            database_url,
            port: parse_or(&lookup, "PORT", 8080)?,
            default_page_size: parse_or(&lookup, "DEFAULT_PAGE_SIZE", 20)?,
            max_page_size: parse_or(&lookup, "MAX_PAGE_SIZE", 100)?,
        };

        if config.max_page_size < 1 {
            return Err(ConfigError::Invalid {
                name: "MAX_PAGE_SIZE",
                value: config.max_page_size.to_string(),
            });
        }
        if config.default_page_size < 1 || config.default_page_size > config.max_page_size {
            return Err(ConfigError::Invalid {
                name: "DEFAULT_PAGE_SIZE",
                value: config.default_page_size.to_string(),
            });
        }

        Ok(config)
    }

    /// Clamp a requested page to `1..=max_page_size` rows starting at a non-negative offset
    pub fn page(&self, limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
        let limit = limit
            .unwrap_or(self.default_page_size)
            .clamp(1, self.max_page_size);
        (limit, offset.unwrap_or(0).max(0))
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
