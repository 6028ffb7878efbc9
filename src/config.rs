//! Configuration Module
//!
//! Handles loading server and cache configuration from environment variables.

use std::env;
use std::time::Duration;

// == Cache TTLs ==
/// Per-operation cache lifetimes.
///
/// Entity and category results are assumed to change less often than list
/// membership; search results are treated as the most perishable.
#[derive(Debug, Clone, Copy)]
pub struct CacheTtls {
    /// TTL for list-query results (medium)
    pub list: Duration,
    /// TTL for assembled aggregate records (long)
    pub entity: Duration,
    /// TTL for free-text search results (short)
    pub search: Duration,
    /// TTL for per-category results (long)
    pub category: Duration,
}

impl Default for CacheTtls {
    fn default() -> Self {
        Self {
            list: Duration::from_secs(300),
            entity: Duration::from_secs(1800),
            search: Duration::from_secs(60),
            category: Duration::from_secs(1800),
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Per-operation cache TTLs
    pub ttls: CacheTtls,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `LIST_TTL_SECS` - List cache TTL in seconds (default: 300)
    /// - `ENTITY_TTL_SECS` - Aggregate cache TTL in seconds (default: 1800)
    /// - `SEARCH_TTL_SECS` - Search cache TTL in seconds (default: 60)
    /// - `CATEGORY_TTL_SECS` - Category cache TTL in seconds (default: 1800)
    pub fn from_env() -> Self {
        let defaults = CacheTtls::default();
        Self {
            server_port: env_parsed("SERVER_PORT").unwrap_or(3000),
            ttls: CacheTtls {
                list: env_ttl("LIST_TTL_SECS").unwrap_or(defaults.list),
                entity: env_ttl("ENTITY_TTL_SECS").unwrap_or(defaults.entity),
                search: env_ttl("SEARCH_TTL_SECS").unwrap_or(defaults.search),
                category: env_ttl("CATEGORY_TTL_SECS").unwrap_or(defaults.category),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            ttls: CacheTtls::default(),
        }
    }
}

fn env_parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

fn env_ttl(name: &str) -> Option<Duration> {
    env_parsed::<u64>(name).map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.ttls.list, Duration::from_secs(300));
        assert_eq!(config.ttls.entity, Duration::from_secs(1800));
        assert_eq!(config.ttls.search, Duration::from_secs(60));
        assert_eq!(config.ttls.category, Duration::from_secs(1800));
    }

    #[test]
    fn test_search_ttl_is_shortest() {
        let ttls = CacheTtls::default();
        assert!(ttls.search < ttls.list);
        assert!(ttls.list < ttls.entity);
    }

    #[test]
    fn test_config_from_env_defaults() {
        env::remove_var("SERVER_PORT");
        env::remove_var("LIST_TTL_SECS");
        env::remove_var("ENTITY_TTL_SECS");
        env::remove_var("SEARCH_TTL_SECS");
        env::remove_var("CATEGORY_TTL_SECS");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.ttls.search, Duration::from_secs(60));
    }
}
