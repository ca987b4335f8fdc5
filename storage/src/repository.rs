use crate::error::Result;
use crate::models::{NewProduct, Product, ProductPatch};

/// CRUD and search over the product collection.
///
/// Every call is a full read-modify-write against the backing store; there is
/// no locking between calls, so the last `save_all` wins.
pub trait ProductRepository: Send + Sync {
    /// Reads the whole collection. An absent or empty stored value yields an empty vec.
    fn load_all(&self) -> Result<Vec<Product>>;

    /// Overwrites the stored collection with `products`.
    fn save_all(&self, products: &[Product]) -> Result<()>;

    /// Appends a product built from `data` with a freshly generated id.
    fn create(&self, data: NewProduct) -> Result<Product>;

    fn find_by_id(&self, id: &str) -> Result<Option<Product>>;

    /// Shallow-merges `patch` into the product with `id`. Returns `None` when no product matches.
    fn update(&self, id: &str, patch: ProductPatch) -> Result<Option<Product>>;

    /// Returns `false` when no product with `id` exists.
    fn delete(&self, id: &str) -> Result<bool>;

    /// Case-insensitive substring match on `name`, in stored order.
    fn search_by_name(&self, keyword: &str) -> Result<Vec<Product>>;
}
