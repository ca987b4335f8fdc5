//! storefront CLI: list, search, show and manage products in the local store. Config from env and optional CLI args.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use storage::{FileKeyValueStore, KvProductRepository};
use storefront_cli::{execute, Cli, StorefrontConfig};
use storefront_core::init_tracing;
use tracing::error;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = StorefrontConfig::load(cli.store).context("Load storefront config")?;
    init_tracing(&config.log_file).context("Initialize tracing")?;

    let repo = KvProductRepository::new(FileKeyValueStore::new(&config.store_path))
        .with_key(config.products_key.clone());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match execute(&repo, cli.command, &mut out, &mut confirm_on_stdin).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is_user_facing() => {
            writeln!(out, "{}", e)?;
            Ok(ExitCode::from(2))
        }
        Err(e) => {
            error!("Command failed: {}", e);
            Err(e).with_context(|| format!("Store at {}", config.store_path.display()))
        }
    }
}

fn confirm_on_stdin(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
