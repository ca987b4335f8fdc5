//! # storefront-core
//!
//! Shared pieces for the storefront workspace: the front-end error taxonomy
//! ([`StorefrontError`], [`ValidationError`]) and tracing initialization.

pub mod error;
pub mod logger;

pub use error::{Result, StorefrontError, ValidationError};
pub use logger::init_tracing;
