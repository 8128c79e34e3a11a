use std::env;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

/// Runtime configuration, read once at startup from the environment.
///
/// `dotenvy` loads a `.env` file during bootstrap, so development setups can
/// keep the backend URL out of the shell profile.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend base URL, without the `/api` prefix.
    pub api_base_url: String,
    /// WebSocket endpoint for the realtime channel.
    pub ws_url: String,
    /// Per-view poll intervals (the pages refetch at different cadences).
    pub jobs_poll_interval: Duration,
    pub shifts_poll_interval: Duration,
    pub shipments_poll_interval: Duration,
    pub warehouse_poll_interval: Duration,
    pub messages_poll_interval: Duration,
    /// HTTP request timeout.
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            ws_url: "ws://localhost:8000/ws".to_string(),
            jobs_poll_interval: Duration::from_secs(5),
            shifts_poll_interval: Duration::from_secs(5),
            shipments_poll_interval: Duration::from_secs(10),
            warehouse_poll_interval: Duration::from_secs(3),
            messages_poll_interval: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();

        let api_base_url = env::var("FABRIKA_API_URL")
            .unwrap_or(defaults.api_base_url)
            .trim_end_matches('/')
            .to_string();
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "FABRIKA_API_URL must be an http(s) URL, got '{}'",
                api_base_url
            )));
        }

        let ws_url = env::var("FABRIKA_WS_URL").unwrap_or_else(|_| {
            // Derive ws:// from the API URL when not set explicitly
            format!(
                "{}/ws",
                api_base_url
                    .replacen("https://", "wss://", 1)
                    .replacen("http://", "ws://", 1)
            )
        });

        Ok(Self {
            api_base_url,
            ws_url,
            jobs_poll_interval: interval_from_env("FABRIKA_JOBS_POLL_SECS", defaults.jobs_poll_interval)?,
            shifts_poll_interval: interval_from_env("FABRIKA_SHIFTS_POLL_SECS", defaults.shifts_poll_interval)?,
            shipments_poll_interval: interval_from_env(
                "FABRIKA_SHIPMENTS_POLL_SECS",
                defaults.shipments_poll_interval,
            )?,
            warehouse_poll_interval: interval_from_env(
                "FABRIKA_WAREHOUSE_POLL_SECS",
                defaults.warehouse_poll_interval,
            )?,
            messages_poll_interval: interval_from_env(
                "FABRIKA_MESSAGES_POLL_SECS",
                defaults.messages_poll_interval,
            )?,
            request_timeout: interval_from_env("FABRIKA_REQUEST_TIMEOUT_SECS", defaults.request_timeout)?,
        })
    }
}

fn interval_from_env(key: &str, default: Duration) -> AppResult<Duration> {
    match env::var(key) {
        Ok(raw) => {
            let secs: u64 = raw
                .parse()
                .map_err(|_| AppError::Config(format!("{} must be a positive integer, got '{}'", key, raw)))?;
            if secs == 0 {
                return Err(AppError::Config(format!("{} must be greater than zero", key)));
            }
            Ok(Duration::from_secs(secs))
        }
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert!(config.warehouse_poll_interval < config.shipments_poll_interval);
    }

    #[test]
    fn test_ws_url_derived_from_api_url() {
        let api = "https://fabrika.example.com";
        let derived = format!(
            "{}/ws",
            api.replacen("https://", "wss://", 1).replacen("http://", "ws://", 1)
        );
        assert_eq!(derived, "wss://fabrika.example.com/ws");
    }
}
