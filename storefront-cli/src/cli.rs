//! CLI parser.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Storefront catalog: list, search, show and manage products", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Store file path (overrides STOREFRONT_STORE_PATH).
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Listing page: every product as a card.
    List,
    /// Listing page filtered by a case-insensitive name match.
    Search { keyword: String },
    /// Detail page for one product.
    Show { id: String },
    /// Admin management list.
    Admin,
    /// Add a product; the image file is embedded as a data URL.
    Add {
        #[arg(short, long)]
        name: String,
        #[arg(short, long, allow_negative_numbers = true)]
        price: f64,
        #[arg(short, long, default_value = "")]
        description: String,
        #[arg(short, long)]
        image: Option<PathBuf>,
    },
    /// Update the given fields of a product.
    Update {
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long, allow_negative_numbers = true)]
        price: Option<f64>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        image: Option<PathBuf>,
    },
    /// Delete a product (asks for confirmation unless --yes).
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "storefront",
            "add",
            "--name",
            "Shirt",
            "--price",
            "19.5",
            "--image",
            "shirt.png",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Commands::Add {
                name: "Shirt".to_string(),
                price: 19.5,
                description: String::new(),
                image: Some(PathBuf::from("shirt.png")),
            }
        );
        assert!(cli.store.is_none());
    }

    #[test]
    fn test_parse_global_store_flag() {
        let cli =
            Cli::try_parse_from(["storefront", "list", "--store", "/tmp/s.json"]).unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/s.json")));
        assert_eq!(cli.command, Commands::List);
    }

    #[test]
    fn test_parse_delete_yes() {
        let cli = Cli::try_parse_from(["storefront", "delete", "prod_1_abc", "-y"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Delete {
                id: "prod_1_abc".to_string(),
                yes: true,
            }
        );
    }
}
