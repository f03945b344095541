//! Runtime configuration.
//!
//! Defaults are compiled in; `.env` or the process environment may override
//! the endpoint and the log4rs config file location.

/// RIPEstat country-resource-list data call.
pub const RIPE_STAT_URL: &str = "https://stat.ripe.net/data/country-resource-list/data.json";

/// Country whose announced prefixes are checked.
pub const COUNTRY_CODE: &str = "US";

/// Ask for IPv4 resources as CIDR prefixes instead of address ranges.
pub const V4_FORMAT: &str = "prefix";

pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

pub const ENV_RIPE_STAT_URL: &str = "RIPE_STAT_URL";
pub const ENV_LOG_CONFIG: &str = "RIPE_IP_CHECKER_LOG_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub ripe_stat_url: String,
    pub country: String,
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ripe_stat_url: RIPE_STAT_URL.to_string(),
            country: COUNTRY_CODE.to_string(),
            log_config: LOG_CONFIG_FILE.to_string(),
        }
    }
}

impl Config {
    /// Build from the process environment. Call `dotenv::dotenv()` first to
    /// pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();
        Config {
            ripe_stat_url: get(ENV_RIPE_STAT_URL).unwrap_or(defaults.ripe_stat_url),
            country: defaults.country,
            log_config: get(ENV_LOG_CONFIG).unwrap_or(defaults.log_config),
        }
    }
}
