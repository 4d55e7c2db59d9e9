use std::time::Duration;

use crate::errors::GenerationError;
use crate::llm_client::ANTHROPIC_API_URL;

/// Application configuration loaded from environment variables.
/// Startup fails if the provider credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub anthropic_base_url: String,
    pub llm_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
    /// Browser origin allowed by CORS. Unset means any origin.
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, GenerationError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GenerationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let anthropic_api_key = lookup("ANTHROPIC_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                GenerationError::Configuration(
                    "Required environment variable 'ANTHROPIC_API_KEY' is not set".to_string(),
                )
            })?;

        let llm_timeout = match lookup("LLM_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map(Duration::from_secs).map_err(|_| {
                GenerationError::Configuration(
                    "LLM_TIMEOUT_SECS must be a whole number of seconds".to_string(),
                )
            })?,
            None => Duration::from_secs(120),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                GenerationError::Configuration("PORT must be a valid port number".to_string())
            })?,
            None => 8080,
        };

        Ok(Config {
            anthropic_api_key,
            anthropic_base_url: lookup("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|| ANTHROPIC_API_URL.to_string()),
            llm_timeout,
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_fails_fast() {
        let result = Config::from_lookup(lookup_from(&[("PORT", "9000")]));
        assert!(matches!(result, Err(GenerationError::Configuration(_))));
    }

    #[test]
    fn test_blank_api_key_is_treated_as_missing() {
        let result = Config::from_lookup(lookup_from(&[("ANTHROPIC_API_KEY", "   ")]));
        assert!(matches!(result, Err(GenerationError::Configuration(_))));
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(&[("ANTHROPIC_API_KEY", "sk-test")])).unwrap();
        assert_eq!(config.anthropic_api_key, "sk-test");
        assert_eq!(config.anthropic_base_url, ANTHROPIC_API_URL);
        assert_eq!(config.llm_timeout, Duration::from_secs(120));
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.cors_allowed_origin, None);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("PORT", "not-a-port"),
        ]));
        assert!(matches!(result, Err(GenerationError::Configuration(_))));
    }

    #[test]
    fn test_overrides_read() {
        let config = Config::from_lookup(lookup_from(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("ANTHROPIC_BASE_URL", "http://127.0.0.1:9999/v1/messages"),
            ("LLM_TIMEOUT_SECS", "30"),
            ("PORT", "3000"),
            ("CORS_ALLOWED_ORIGIN", " https://dashboard.example.com "),
        ]))
        .unwrap();
        assert_eq!(config.anthropic_base_url, "http://127.0.0.1:9999/v1/messages");
        assert_eq!(config.llm_timeout, Duration::from_secs(30));
        assert_eq!(config.port, 3000);
        assert_eq!(
            config.cors_allowed_origin.as_deref(),
            Some("https://dashboard.example.com")
        );
    }
}
