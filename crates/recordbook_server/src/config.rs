use once_cell::sync::OnceCell;
use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const ENV_BIND_ADDR: &str = "RECORDBOOK_BIND_ADDR";
pub const ENV_LOG_LEVEL: &str = "RECORDBOOK_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "RECORDBOOK_LOG_DIR";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Returns the process configuration, loading it from the environment once.
pub fn config() -> Result<&'static Config, ConfigError> {
    static INSTANCE: OnceCell<Config> = OnceCell::new();
    INSTANCE.get_or_try_init(Config::load_from_env)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Absolute directory for rotating log files; `None` logs to stderr.
    pub log_dir: Option<String>,
}

impl Config {
    pub fn load_from_env() -> Result<Config, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ConfigError> {
        let bind_value = non_empty(lookup(ENV_BIND_ADDR)).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                name: ENV_BIND_ADDR,
                value: bind_value.clone(),
            })?;

        let log_level = non_empty(lookup(ENV_LOG_LEVEL))
            .unwrap_or_else(|| recordbook_core::default_log_level().to_string());

        Ok(Config {
            bind_addr,
            log_level,
            log_dir: non_empty(lookup(ENV_LOG_DIR)),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { name: &'static str, value: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { name, value } => {
                write!(f, "invalid value `{value}` for environment variable {name}")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{Config, ConfigError, ENV_BIND_ADDR, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup(&[])).expect("defaults should load");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8000");
        assert_eq!(config.log_level, recordbook_core::default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = Config::from_lookup(lookup(&[
            (ENV_BIND_ADDR, "0.0.0.0:9090"),
            (ENV_LOG_LEVEL, "warn"),
            (ENV_LOG_DIR, "/var/log/recordbook"),
        ]))
        .expect("explicit values should load");
        assert_eq!(config.bind_addr.port(), 9090);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/recordbook"));
    }

    #[test]
    fn blank_log_dir_means_stderr() {
        let config = Config::from_lookup(lookup(&[(ENV_LOG_DIR, "   ")])).expect("should load");
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn invalid_bind_addr_names_the_variable() {
        let err = Config::from_lookup(lookup(&[(ENV_BIND_ADDR, "localhost")]))
            .expect_err("hostname without port must fail");
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                name: ENV_BIND_ADDR,
                value: "localhost".to_string()
            }
        );
        assert!(err.to_string().contains(ENV_BIND_ADDR));
    }
}
