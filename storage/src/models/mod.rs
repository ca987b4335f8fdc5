//! Product models for persistence.

mod new_product;
mod product;
mod product_patch;

pub use new_product::NewProduct;
pub use product::Product;
pub use product_patch::ProductPatch;
