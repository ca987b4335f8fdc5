use std::env;
use std::path::PathBuf;

use storage::PRODUCTS_KEY;
use storefront_core::{Result, StorefrontError};

/// Storefront configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Local store file holding every key.
    pub store_path: PathBuf,
    pub products_key: String,
    pub log_file: String,
}

impl StorefrontConfig {
    /// Loads config from the environment. `store_path` overrides STOREFRONT_STORE_PATH when given.
    pub fn load(store_path: Option<PathBuf>) -> Result<Self> {
        let store_path = store_path.unwrap_or_else(|| {
            env::var("STOREFRONT_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data/local-storage.json"))
        });
        let products_key =
            env::var("STOREFRONT_PRODUCTS_KEY").unwrap_or_else(|_| PRODUCTS_KEY.to_string());
        let log_file =
            env::var("STOREFRONT_LOG_FILE").unwrap_or_else(|_| "logs/storefront.log".to_string());

        if products_key.trim().is_empty() {
            return Err(StorefrontError::Config(
                "STOREFRONT_PRODUCTS_KEY must not be empty".to_string(),
            ));
        }

        Ok(Self {
            store_path,
            products_key,
            log_file,
        })
    }
}
