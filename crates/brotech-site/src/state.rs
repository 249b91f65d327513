//! Application state shared across all request handlers.

use std::sync::Arc;

use brotech_core::StoreHandle;

use crate::config::Config;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Content store handle, resolved once at startup.
    pub store: Arc<StoreHandle>,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state, initializing the content store client.
    pub fn new(config: Config) -> Self {
        let store = StoreHandle::init(&config.store_config());

        if !store.is_available() {
            tracing::warn!(
                "content store unavailable; blog and impact numbers will degrade to \
                 setup instructions and defaults"
            );
        }

        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_without_key() -> Config {
        Config {
            bind_addr: "127.0.0.1:0".to_string(),
            base_url: "http://localhost:8080".to_string(),
            site_name: "BroTech Web Solutions".to_string(),
            api_key: None,
            store_url: "http://localhost:8123".to_string(),
            project_id: "brotech-web-solutions".to_string(),
            auth_domain: "auth.brotech-web.dev".to_string(),
            storage_bucket: "brotech-web-solutions-assets".to_string(),
            sender_id: "288226787153".to_string(),
        }
    }

    #[test]
    fn state_without_key_has_unavailable_store() {
        let state = AppState::new(config_without_key());
        assert!(!state.store.is_available());
    }

    #[test]
    fn state_with_key_has_available_store() {
        let state = AppState::new(Config {
            api_key: Some("test-key".to_string()),
            ..config_without_key()
        });
        assert!(state.store.is_available());
    }
}
