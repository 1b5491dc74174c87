//! Client configuration baked in at build time.
//!
//! A static WASM bundle has no process environment, so the keys are read with
//! `option_env!` when the bundle is compiled, e.g.
//! `REPORTS_PUBLIC_URL=http://192.168.100.9:8000/api trunk build`.

use std::sync::OnceLock;

use common::config::{ClientConfig, API_URL_KEY, PUBLIC_URL_KEY, REQUEST_TIMEOUT_KEY};

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

pub fn client_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        ClientConfig::from_lookup(|key| {
            let value = match key {
                API_URL_KEY => option_env!("REPORTS_API_URL"),
                PUBLIC_URL_KEY => option_env!("REPORTS_PUBLIC_URL"),
                REQUEST_TIMEOUT_KEY => option_env!("REQUEST_TIMEOUT_MS"),
                _ => None,
            };
            value.map(str::to_string)
        })
    })
}
