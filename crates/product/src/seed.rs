use crate::{model::product::Product, repository::ProductStore};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Builds the startup store, optionally pre-populated from a JSON array of products.
pub async fn load_store(seed_file: Option<&Path>) -> Result<ProductStore> {
    let Some(path) = seed_file else {
        info!("📦 Starting with an empty product store");
        return Ok(ProductStore::new());
    };

    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;

    let store = parse_seed(&raw).with_context(|| format!("Invalid seed file {}", path.display()))?;

    info!(
        "📦 Loaded {} products from {}",
        store.len()?,
        path.display()
    );
    Ok(store)
}

fn parse_seed(raw: &str) -> Result<ProductStore> {
    let products: Vec<Product> =
        serde_json::from_str(raw).context("Seed must be a JSON array of products")?;

    Ok(ProductStore::with_products(products)?)
}
