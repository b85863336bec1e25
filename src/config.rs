use std::{fmt, net::SocketAddr, time::Duration};

pub const ENV_API_KEY: &str = "EMAIL_DRAFTER_OPENAI_API_KEY";
pub const ENV_API_KEY_FALLBACK: &str = "OPENAI_API_KEY";
pub const ENV_MODEL: &str = "EMAIL_DRAFTER_OPENAI_MODEL";
pub const ENV_BASE_URL: &str = "EMAIL_DRAFTER_OPENAI_BASE_URL";
pub const ENV_SAVE_URL: &str = "EMAIL_DRAFTER_STORAGE_SAVE_URL";
pub const ENV_LIST_URL: &str = "EMAIL_DRAFTER_STORAGE_LIST_URL";
pub const ENV_BIND: &str = "EMAIL_DRAFTER_BIND";
pub const ENV_TIMEOUT_S: &str = "EMAIL_DRAFTER_TIMEOUT_S";

const DEFAULT_BIND: &str = "0.0.0.0:5001";
const DEFAULT_TIMEOUT_S: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Expected env var: {0}")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Everything read from the environment, once, at startup.
#[derive(Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub save_url: Option<String>,
    pub list_url: Option<String>,
    pub bind: SocketAddr,
    pub timeout: Duration,
}

//never print the key
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("save_url", &self.save_url)
            .field("list_url", &self.list_url)
            .field("bind", &self.bind)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        //empty values count as unset
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = read(ENV_API_KEY)
            .or_else(|| read(ENV_API_KEY_FALLBACK))
            .ok_or(ConfigError::Missing(ENV_API_KEY))?;

        let bind_raw = read(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw.parse::<SocketAddr>().map_err(|_| ConfigError::Invalid {
            name: ENV_BIND,
            value: bind_raw.clone(),
        })?;

        let timeout = match read(ENV_TIMEOUT_S) {
            None => Duration::from_secs(DEFAULT_TIMEOUT_S),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(s) if s > 0 => Duration::from_secs(s),
                _ => {
                    return Err(ConfigError::Invalid {
                        name: ENV_TIMEOUT_S,
                        value: raw,
                    })
                }
            },
        };

        Ok(Config {
            api_key,
            model: read(ENV_MODEL).unwrap_or_else(|| openai_api::DEFAULT_MODEL.to_string()),
            base_url: read(ENV_BASE_URL)
                .unwrap_or_else(|| openai_api::DEFAULT_BASE_URL.to_string()),
            save_url: read(ENV_SAVE_URL),
            list_url: read(ENV_LIST_URL),
            bind,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[(ENV_API_KEY, "sk-1")])).unwrap();
        assert_eq!(config.api_key, "sk-1");
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.bind, "0.0.0.0:5001".parse::<SocketAddr>().unwrap());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.save_url, None);
        assert_eq!(config.list_url, None);
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(
            Config::from_lookup(lookup(&[])).unwrap_err(),
            ConfigError::Missing(ENV_API_KEY)
        );
        assert_eq!(
            Config::from_lookup(lookup(&[(ENV_API_KEY, "  ")])).unwrap_err(),
            ConfigError::Missing(ENV_API_KEY)
        );
    }

    #[test]
    fn test_fallback_key() {
        let config = Config::from_lookup(lookup(&[(ENV_API_KEY_FALLBACK, "sk-2")])).unwrap();
        assert_eq!(config.api_key, "sk-2");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (ENV_API_KEY, "sk-1"),
            (ENV_MODEL, "gpt-4o-mini"),
            (ENV_SAVE_URL, "http://store/emails"),
            (ENV_LIST_URL, "http://store/emails"),
            (ENV_BIND, "127.0.0.1:8080"),
            (ENV_TIMEOUT_S, "5"),
        ]))
        .unwrap();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.save_url.as_deref(), Some("http://store/emails"));
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_lookup(lookup(&[(ENV_API_KEY, "k"), (ENV_BIND, "nowhere")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: ENV_BIND,
                value: "nowhere".to_string()
            }
        );
        for bad in ["0", "soon", "-1"] {
            let err = Config::from_lookup(lookup(&[(ENV_API_KEY, "k"), (ENV_TIMEOUT_S, bad)]))
                .unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { name: ENV_TIMEOUT_S, .. }));
        }
    }

    #[test]
    fn test_debug_hides_key() {
        let config = Config::from_lookup(lookup(&[(ENV_API_KEY, "sk-very-secret")])).unwrap();
        assert!(!format!("{:?}", config).contains("sk-very-secret"));
    }
}
