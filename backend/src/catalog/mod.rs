//! Product catalog access.
//!
//! The catalog is read once per process, from `SHOP_CATALOG_PATH` when set,
//! otherwise from the built-in catalog.

mod builtin_catalog;

use std::{collections::HashSet, path::Path, sync::Arc};

use anyhow::Context;
use common::product::Product;
use tokio::sync::OnceCell;

use crate::config::get_catalog_path;

pub use builtin_catalog::builtin_catalog;

static CATALOG: OnceCell<Arc<Vec<Product>>> = OnceCell::const_new();

pub async fn load_catalog() -> anyhow::Result<Arc<Vec<Product>>> {
    let catalog = CATALOG
        .get_or_try_init(|| async {
            let products = match get_catalog_path() {
                Some(path) => read_catalog_file(&path).await?,
                None => builtin_catalog(),
            };
            tracing::info!("Catalog loaded: {} products", products.len());
            anyhow::Ok(Arc::new(products))
        })
        .await?;
    Ok(catalog.clone())
}

pub async fn read_catalog_file(path: &Path) -> anyhow::Result<Vec<Product>> {
    tracing::info!("Reading catalog from {}", path.display());
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
    let products: Vec<Product> = serde_json::from_slice(&bytes)
        .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;
    Ok(products)
}

/// Drops later products repeating an id, a slug or a (case-insensitive) name.
pub fn deduplicate_products(products: Vec<Product>) -> Vec<Product> {
    let mut seen_ids = HashSet::new();
    let mut seen_slugs = HashSet::new();
    let mut seen_names = HashSet::new();
    products
        .into_iter()
        .filter(|p| {
            let name = p.name.to_lowercase();
            if seen_ids.contains(&p.id) || seen_slugs.contains(&p.slug) || seen_names.contains(&name) {
                return false;
            }
            seen_ids.insert(p.id.clone());
            seen_slugs.insert(p.slug.clone());
            seen_names.insert(name);
            true
        })
        .collect()
}
