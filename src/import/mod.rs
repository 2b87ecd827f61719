//! Bulk JSON importers.
//!
//! Each function parses a JSON array into typed records, inserts the whole
//! batch, and returns a human-readable count message. Malformed JSON and
//! constraint violations propagate; there is no partial-import recovery.

use crate::core::Result;
use crate::models::{Category, CategoryDraft, CategoryProduct, Product, User};
use crate::storage::ShopDb;
use tracing::debug;

fn imported(count: usize) -> String {
    format!("Successfully imported {count}")
}

pub fn import_users(db: &mut ShopDb, input_json: &str) -> Result<String> {
    let users: Vec<User> = serde_json::from_str(input_json)?;
    let count = db.insert_users(users)?;
    debug!(count, "imported users");
    Ok(imported(count))
}

pub fn import_products(db: &mut ShopDb, input_json: &str) -> Result<String> {
    let products: Vec<Product> = serde_json::from_str(input_json)?;
    let count = db.insert_products(products)?;
    debug!(count, "imported products");
    Ok(imported(count))
}

/// Categories with a null name are dropped before insertion; the returned
/// message counts only the records that were kept.
pub fn import_categories(db: &mut ShopDb, input_json: &str) -> Result<String> {
    let drafts: Vec<CategoryDraft> = serde_json::from_str(input_json)?;
    let total = drafts.len();
    let categories: Vec<Category> = drafts
        .into_iter()
        .filter_map(|draft| draft.name.map(|name| Category { name }))
        .collect();
    let count = db.insert_categories(categories)?;
    debug!(count, dropped = total - count, "imported categories");
    Ok(imported(count))
}

/// Link ids are taken as-is, without checking that the referenced category or
/// product exists.
pub fn import_category_products(db: &mut ShopDb, input_json: &str) -> Result<String> {
    let links: Vec<CategoryProduct> = serde_json::from_str(input_json)?;
    let count = db.insert_links(links)?;
    debug!(count, "imported category-product links");
    Ok(imported(count))
}
