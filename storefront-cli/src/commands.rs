//! Command execution: maps each subcommand onto repository calls and renders the result.
//!
//! Not-found is reported to the user and is not an error. Validation failures
//! are returned before the repository is touched.

use std::io::Write;
use std::path::Path;

use storage::{NewProduct, ProductPatch, ProductRepository};
use storefront_core::{Result, StorefrontError, ValidationError};
use tracing::info;

use crate::cli::Commands;
use crate::data_url::file_to_data_url;
use crate::view;

/// Runs `command` against `repo`, writing user-facing output to `out`.
///
/// `confirm` is asked before a delete that was not pre-confirmed.
pub async fn execute<R, W>(
    repo: &R,
    command: Commands,
    out: &mut W,
    confirm: &mut dyn FnMut(&str) -> bool,
) -> Result<()>
where
    R: ProductRepository + ?Sized,
    W: Write,
{
    match command {
        Commands::List => {
            let products = repo.load_all()?;
            write!(out, "{}", view::render_listing(&products))?;
        }
        Commands::Search { keyword } => {
            let products = repo.search_by_name(&keyword)?;
            write!(out, "{}", view::render_listing(&products))?;
        }
        Commands::Show { id } => match repo.find_by_id(&id)? {
            Some(product) => write!(out, "{}", view::render_detail(&product))?,
            None => writeln!(out, "{}", view::DETAIL_NOT_FOUND)?,
        },
        Commands::Admin => {
            write!(out, "{}", view::render_admin(&repo.load_all()?))?;
        }
        Commands::Add {
            name,
            price,
            description,
            image,
        } => {
            let name = validate_name(&name)?;
            let price = validate_price(price)?;
            let image = image.ok_or(ValidationError::Missing("image"))?;
            let image_url = read_image(&image).await?;

            let product = repo.create(NewProduct::new(name, price, description, image_url))?;
            writeln!(out, "Product added successfully! (id: {})", product.id)?;
            write!(out, "{}", view::render_admin(&repo.load_all()?))?;
        }
        Commands::Update {
            id,
            name,
            price,
            description,
            image,
        } => {
            let patch = ProductPatch {
                name: name.as_deref().map(validate_name).transpose()?,
                price: price.map(validate_price).transpose()?,
                description,
                image_url: match image {
                    Some(path) => Some(read_image(&path).await?),
                    None => None,
                },
            };
            if patch.is_empty() {
                return Err(ValidationError::EmptyPatch.into());
            }

            match repo.update(&id, patch)? {
                Some(_) => writeln!(out, "Product updated successfully!")?,
                None => writeln!(out, "Product with ID {} not found.", id)?,
            }
            write!(out, "{}", view::render_admin(&repo.load_all()?))?;
        }
        Commands::Delete { id, yes } => {
            if !yes && !confirm("Are you sure you want to delete this product?") {
                writeln!(out, "Deletion cancelled.")?;
                return Ok(());
            }

            if repo.delete(&id)? {
                writeln!(out, "Product deleted.")?;
            } else {
                writeln!(out, "Product with ID {} not found for deletion.", id)?;
            }
            write!(out, "{}", view::render_admin(&repo.load_all()?))?;
        }
    }

    Ok(())
}

fn validate_name(name: &str) -> std::result::Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::Missing("name"));
    }
    Ok(name.to_string())
}

fn validate_price(price: f64) -> std::result::Result<f64, ValidationError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidPrice(price.to_string()));
    }
    Ok(price)
}

async fn read_image(path: &Path) -> Result<String> {
    let url = file_to_data_url(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StorefrontError::NotFound(format!("image file {}", path.display()))
        } else {
            StorefrontError::Io(e)
        }
    })?;
    info!("Embedded {} as data URL", path.display());
    Ok(url)
}
