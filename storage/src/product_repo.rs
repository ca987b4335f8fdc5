//! Product repository: the whole collection stored as one JSON array under a single key.
//!
//! Uses a [`KeyValueStore`] backend and an [`IdGenerator`]; callers use
//! load_all/save_all/create/find_by_id/update/delete/search_by_name.

use tracing::{debug, info, warn};

use crate::error::{Result, StorageError};
use crate::id_generator::{IdGenerator, TimestampIdGenerator};
use crate::kv_store::KeyValueStore;
use crate::models::{NewProduct, Product, ProductPatch};
use crate::repository::ProductRepository;

/// Key the product collection lives under.
pub const PRODUCTS_KEY: &str = "e-commerce-products";

const MAX_ID_ATTEMPTS: usize = 8;

pub struct KvProductRepository<S, G = TimestampIdGenerator> {
    store: S,
    id_generator: G,
    key: String,
}

impl<S: KeyValueStore> KvProductRepository<S, TimestampIdGenerator> {
    pub fn new(store: S) -> Self {
        Self::with_generator(store, TimestampIdGenerator::new())
    }
}

impl<S: KeyValueStore, G: IdGenerator> KvProductRepository<S, G> {
    pub fn with_generator(store: S, id_generator: G) -> Self {
        Self {
            store,
            id_generator,
            key: PRODUCTS_KEY.to_string(),
        }
    }

    /// Stores the collection under `key` instead of [`PRODUCTS_KEY`].
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn fresh_id(&self, products: &[Product]) -> Result<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.id_generator.next_id();
            if !id.is_empty() && !products.iter().any(|p| p.id == id) {
                return Ok(id);
            }
            warn!("Generated id '{}' is empty or already taken, retrying", id);
        }
        Err(StorageError::IdExhausted(MAX_ID_ATTEMPTS))
    }
}

impl<S: KeyValueStore, G: IdGenerator> ProductRepository for KvProductRepository<S, G> {
    fn load_all(&self) -> Result<Vec<Product>> {
        let raw = match self.store.get(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                debug!("No products stored under '{}'", self.key);
                return Ok(Vec::new());
            }
        };

        let products: Vec<Product> =
            serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
                key: self.key.clone(),
                source,
            })?;

        debug!("Loaded {} products", products.len());
        Ok(products)
    }

    fn save_all(&self, products: &[Product]) -> Result<()> {
        // Non-finite floats serialize as `null`, which never loads back.
        if let Some(bad) = products.iter().find(|p| !p.price.is_finite()) {
            warn!("Refusing to save product {} with price {}", bad.id, bad.price);
            return Err(StorageError::InvalidRecord {
                id: bad.id.clone(),
                reason: format!("price must be finite, got {}", bad.price),
            });
        }

        let raw = serde_json::to_string(products)?;
        self.store.set(&self.key, &raw)?;
        debug!("Saved {} products under '{}'", products.len(), self.key);
        Ok(())
    }

    fn create(&self, data: NewProduct) -> Result<Product> {
        let mut products = self.load_all()?;
        let id = self.fresh_id(&products)?;
        let product = Product::from_new(id, data);

        products.push(product.clone());
        self.save_all(&products)?;

        info!("Product added: id={}, name={}", product.id, product.name);
        Ok(product)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Product>> {
        Ok(self.load_all()?.into_iter().find(|p| p.id == id))
    }

    fn update(&self, id: &str, patch: ProductPatch) -> Result<Option<Product>> {
        let mut products = self.load_all()?;

        let Some(index) = products.iter().position(|p| p.id == id) else {
            warn!("Product with id {} not found", id);
            return Ok(None);
        };

        products[index].apply(patch);
        let updated = products[index].clone();
        self.save_all(&products)?;

        info!("Product with id {} updated", id);
        Ok(Some(updated))
    }

    fn delete(&self, id: &str) -> Result<bool> {
        let products = self.load_all()?;
        let original_len = products.len();
        let remaining: Vec<Product> = products.into_iter().filter(|p| p.id != id).collect();

        if remaining.len() == original_len {
            warn!("Product with id {} not found for deletion", id);
            return Ok(false);
        }

        self.save_all(&remaining)?;
        info!("Product with id {} deleted", id);
        Ok(true)
    }

    fn search_by_name(&self, keyword: &str) -> Result<Vec<Product>> {
        let products = self.load_all()?;
        if keyword.is_empty() {
            return Ok(products);
        }

        let keyword = keyword.to_lowercase();
        let matches: Vec<Product> = products
            .into_iter()
            .filter(|p| p.name_contains(&keyword))
            .collect();

        debug!("Found {} products matching '{}'", matches.len(), keyword);
        Ok(matches)
    }
}
