use std::env;

/// Port used when the environment supplies none.
const DEFAULT_PORT: u16 = 5000;

/// Process configuration. The whole surface is a single environment
/// variable; cloud platforms inject `PORT` at deploy time.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_port_var(env::var("PORT").ok().as_deref())
    }

    fn from_port_var(raw: Option<&str>) -> Result<Self, ConfigError> {
        let port = match raw {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidPort(value.to_string()))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { port })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_port_5000_when_unset() {
        let config = Config::from_port_var(None).unwrap();
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn reads_a_numeric_port() {
        let config = Config::from_port_var(Some("8080")).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn rejects_a_non_numeric_port() {
        let err = Config::from_port_var(Some("eighty")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == "eighty"));
    }
}
