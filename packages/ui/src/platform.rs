//! Shared constructors for platform-specific services.
//!
//! - [`make_store`]: the remember-me store
//!   - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorage`]
//!   - **Desktop** (native): a TOML file via [`store::FileStore`] under `<data_dir>/travel-planner/`
//! - [`make_api`]: the HTTP client, configured from `VITE_API_URL`

use api::{ApiConfig, HttpTravelApi};

/// Create the platform-appropriate key-value store.
pub fn make_store() -> impl store::KeyValueStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("travel-planner");
        store::FileStore::new(base)
    }
}

/// Create an API client. An invalid `VITE_API_URL` is logged and the default URL used.
pub fn make_api() -> HttpTravelApi {
    let config = ApiConfig::from_env().unwrap_or_else(|e| {
        tracing::error!("{e}; using {}", api::config::DEFAULT_API_URL);
        ApiConfig::default()
    });
    tracing::debug!(base_url = %config.base_url, "API client configured");
    HttpTravelApi::new(config)
}
