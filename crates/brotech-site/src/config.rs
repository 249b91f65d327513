//! Application configuration loaded from environment variables.

use brotech_core::StoreConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Base URL for this site (used in canonical URLs and OG tags).
    pub base_url: String,

    /// Site name shown in page titles and OG tags.
    pub site_name: String,

    /// Content store API key. The one required credential: when absent the
    /// store client is disabled and content-backed pages show setup
    /// instructions.
    pub api_key: Option<String>,

    /// Content store REST endpoint.
    pub store_url: String,

    /// Content store project identifier.
    pub project_id: String,

    /// Auth domain for the hosted project (kept for parity with the store's
    /// web configuration; not used by the server itself).
    pub auth_domain: String,

    /// Asset bucket identifier.
    pub storage_bucket: String,

    /// Messaging sender identifier.
    pub sender_id: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required for live content (the site still serves without it):
    /// - `BROTECH_API_KEY`: content store credential
    ///
    /// Optional:
    /// - `SITE_BIND_ADDR`: bind address (default: "0.0.0.0:8080")
    /// - `SITE_BASE_URL`: base URL (default: "http://localhost:8080")
    /// - `SITE_NAME`: site name (default: "BroTech Web Solutions")
    /// - `BROTECH_STORE_URL`: store endpoint (default: "https://content.brotech-web.dev")
    /// - `BROTECH_PROJECT_ID`: project ID (default: "brotech-web-solutions")
    /// - `BROTECH_AUTH_DOMAIN`, `BROTECH_STORAGE_BUCKET`, `BROTECH_SENDER_ID`
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("SITE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let base_url = std::env::var("SITE_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string();

        let site_name =
            std::env::var("SITE_NAME").unwrap_or_else(|_| "BroTech Web Solutions".to_string());

        let api_key = std::env::var("BROTECH_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let store_url = std::env::var("BROTECH_STORE_URL")
            .unwrap_or_else(|_| "https://content.brotech-web.dev".to_string());

        let project_id = std::env::var("BROTECH_PROJECT_ID")
            .unwrap_or_else(|_| "brotech-web-solutions".to_string());

        let auth_domain = std::env::var("BROTECH_AUTH_DOMAIN")
            .unwrap_or_else(|_| "auth.brotech-web.dev".to_string());

        let storage_bucket = std::env::var("BROTECH_STORAGE_BUCKET")
            .unwrap_or_else(|_| "brotech-web-solutions-assets".to_string());

        let sender_id =
            std::env::var("BROTECH_SENDER_ID").unwrap_or_else(|_| "288226787153".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            base_url = %base_url,
            store_url = %store_url,
            project = %project_id,
            api_key_present = api_key.is_some(),
            "site configuration loaded"
        );

        Ok(Self {
            bind_addr,
            base_url,
            site_name,
            api_key,
            store_url,
            project_id,
            auth_domain,
            storage_bucket,
            sender_id,
        })
    }

    /// Connection settings for the content store client.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            base_url: self.store_url.clone(),
            project_id: self.project_id.clone(),
            api_key: self.api_key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "SITE_BIND_ADDR",
        "SITE_BASE_URL",
        "SITE_NAME",
        "BROTECH_API_KEY",
        "BROTECH_STORE_URL",
        "BROTECH_PROJECT_ID",
        "BROTECH_AUTH_DOMAIN",
        "BROTECH_STORAGE_BUCKET",
        "BROTECH_SENDER_ID",
    ];

    /// Helper to run config tests with isolated env vars.
    /// Uses a mutex to prevent concurrent env var races.
    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap();

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: Serialized by mutex; only test code touches these vars.
        unsafe {
            for k in ENV_KEYS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            for (k, v) in &saved {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn config_defaults() {
        with_env_vars(&[], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr, "0.0.0.0:8080");
            assert_eq!(config.base_url, "http://localhost:8080");
            assert_eq!(config.site_name, "BroTech Web Solutions");
            assert!(config.api_key.is_none());
            assert_eq!(config.store_url, "https://content.brotech-web.dev");
            assert_eq!(config.project_id, "brotech-web-solutions");
            assert_eq!(config.auth_domain, "auth.brotech-web.dev");
            assert_eq!(config.storage_bucket, "brotech-web-solutions-assets");
            assert_eq!(config.sender_id, "288226787153");
        });
    }

    #[test]
    fn config_custom_values() {
        with_env_vars(
            &[
                ("SITE_BIND_ADDR", "127.0.0.1:9090"),
                ("SITE_BASE_URL", "https://brotech-web.dev"),
                ("BROTECH_API_KEY", "live-key"),
                ("BROTECH_STORE_URL", "https://store.example.com"),
                ("BROTECH_PROJECT_ID", "my-project"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.bind_addr, "127.0.0.1:9090");
                assert_eq!(config.base_url, "https://brotech-web.dev");
                assert_eq!(config.api_key.as_deref(), Some("live-key"));
                assert_eq!(config.store_url, "https://store.example.com");
                assert_eq!(config.project_id, "my-project");
            },
        );
    }

    #[test]
    fn config_base_url_trailing_slash_stripped() {
        with_env_vars(&[("SITE_BASE_URL", "https://brotech-web.dev/")], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.base_url, "https://brotech-web.dev");
        });
    }

    #[test]
    fn config_empty_api_key_treated_as_absent() {
        with_env_vars(&[("BROTECH_API_KEY", "")], || {
            let config = Config::from_env().unwrap();
            assert!(config.api_key.is_none());
        });
    }

    #[test]
    fn store_config_carries_credential() {
        with_env_vars(&[("BROTECH_API_KEY", "live-key")], || {
            let config = Config::from_env().unwrap();
            let store = config.store_config();
            assert_eq!(store.base_url, "https://content.brotech-web.dev");
            assert_eq!(store.project_id, "brotech-web-solutions");
            assert_eq!(store.api_key.as_deref(), Some("live-key"));
        });
    }
}
