//! Client configuration: where the backend lives and how long to wait for it.
//!
//! Values come from a key lookup so the front-end can feed compile-time variables and
//! tests can feed a map. Invalid values fall back to defaults with a warning.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use log::{info, warn};

use crate::endpoints::ReportEndpoints;

pub const API_URL_KEY: &str = "REPORTS_API_URL";
pub const PUBLIC_URL_KEY: &str = "REPORTS_PUBLIC_URL";
pub const REQUEST_TIMEOUT_KEY: &str = "REQUEST_TIMEOUT_MS";

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    /// Base for links handed to other devices (QR codes). Defaults to `api_base`.
    pub public_base: String,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ClientConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = load(&lookup, API_URL_KEY, DEFAULT_API_URL.to_string());
        let public_base = load(&lookup, PUBLIC_URL_KEY, api_base.clone());
        let timeout_ms: u32 = load(&lookup, REQUEST_TIMEOUT_KEY, DEFAULT_REQUEST_TIMEOUT_MS);

        Self {
            api_base,
            public_base,
            request_timeout: Duration::from_millis(u64::from(timeout_ms.max(1))),
        }
    }

    pub fn endpoints(&self) -> ReportEndpoints {
        ReportEndpoints::new(&self.api_base, &self.public_base)
    }

    pub fn timeout_ms(&self) -> u32 {
        u32::try_from(self.request_timeout.as_millis()).unwrap_or(u32::MAX)
    }
}

fn load<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key).map(|raw| raw.trim().to_string()) {
        Some(raw) if !raw.is_empty() => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
        _ => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> ClientConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_point_at_local_backend() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.api_base, DEFAULT_API_URL);
        assert_eq!(cfg.public_base, DEFAULT_API_URL);
        assert_eq!(cfg.timeout_ms(), DEFAULT_REQUEST_TIMEOUT_MS);
    }

    #[test]
    fn public_base_follows_api_base_unless_overridden() {
        let cfg = config(&[(API_URL_KEY, "https://reports.example/api")]);
        assert_eq!(cfg.public_base, "https://reports.example/api");

        let cfg = config(&[
            (API_URL_KEY, "https://reports.example/api"),
            (PUBLIC_URL_KEY, "http://192.168.1.20:8000/api"),
        ]);
        assert_eq!(
            cfg.endpoints().public_view("R1"),
            "http://192.168.1.20:8000/api/view/R1"
        );
    }

    #[test]
    fn invalid_timeout_falls_back_to_default() {
        let cfg = config(&[(REQUEST_TIMEOUT_KEY, "soon")]);
        assert_eq!(cfg.timeout_ms(), DEFAULT_REQUEST_TIMEOUT_MS);

        let cfg = config(&[(REQUEST_TIMEOUT_KEY, " 1500 ")]);
        assert_eq!(cfg.request_timeout, Duration::from_millis(1500));
    }
}
