//! Storage crate: product persistence and repository abstractions.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – Product, NewProduct, ProductPatch
//! - [`kv_store`] – KeyValueStore trait with in-memory and file backends
//! - [`id_generator`] – IdGenerator trait and the timestamp-based default
//! - [`repository`] – ProductRepository trait
//! - [`product_repo`] – KvProductRepository (whole collection under one key)

mod error;
mod id_generator;
mod kv_store;
mod models;
mod product_repo;
mod repository;


pub use error::{Result, StorageError};
pub use id_generator::{IdGenerator, TimestampIdGenerator, ID_PREFIX};
pub use kv_store::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};
pub use models::{NewProduct, Product, ProductPatch};
pub use product_repo::{KvProductRepository, PRODUCTS_KEY};
pub use repository::ProductRepository;
