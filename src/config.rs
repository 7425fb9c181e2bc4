use std::env;
use std::time::Duration;

use crate::netrum::DEFAULT_API_URL;

/// Default gap between the two claim samples.
pub const DEFAULT_SAMPLE_DELAY_SECS: u64 = 30;

/// Default per-call deadline for upstream requests.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 20;

/// Runtime settings, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_url: String,
    pub sample_delay: Duration,
    /// `None` when `UPSTREAM_TIMEOUT_SECS=0`.
    pub upstream_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let number = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };

        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port: u16 = lookup("PORT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);
        let api_url = lookup("NETRUM_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let sample_delay =
            Duration::from_secs(number("CLAIM_SAMPLE_DELAY_SECS", DEFAULT_SAMPLE_DELAY_SECS));
        let upstream_timeout = match number("UPSTREAM_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS) {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        Self {
            host,
            port,
            api_url,
            sample_delay,
            upstream_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
        assert_eq!(cfg.sample_delay, Duration::from_secs(30));
        assert_eq!(cfg.upstream_timeout, Some(Duration::from_secs(20)));
    }

    #[test]
    fn overrides() {
        let cfg = config(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("NETRUM_API_URL", "http://localhost:3000/mining/"),
            ("CLAIM_SAMPLE_DELAY_SECS", "5"),
            ("UPSTREAM_TIMEOUT_SECS", "0"),
        ]);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.api_url, "http://localhost:3000/mining");
        assert_eq!(cfg.sample_delay, Duration::from_secs(5));
        assert_eq!(cfg.upstream_timeout, None);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let cfg = config(&[
            ("PORT", "http"),
            ("CLAIM_SAMPLE_DELAY_SECS", "-1"),
            ("UPSTREAM_TIMEOUT_SECS", "soon"),
        ]);
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.sample_delay, Duration::from_secs(30));
        assert_eq!(cfg.upstream_timeout, Some(Duration::from_secs(20)));
    }
}
