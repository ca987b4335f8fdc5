//! # storefront-cli
//!
//! Terminal front end over the product repository: argument parsing, config
//! loading, image-to-data-URL conversion, and text rendering of the listing,
//! detail and admin views.

pub mod cli;
pub mod commands;
pub mod config;
pub mod data_url;
pub mod view;

pub use cli::{Cli, Commands};
pub use commands::execute;
pub use config::StorefrontConfig;
