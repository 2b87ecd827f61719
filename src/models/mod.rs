//! Record types for the four shop tables.
//!
//! Field names follow the camelCase shape of the source datasets. Record ids
//! are not part of the input JSON for users, products, and categories; the
//! store assigns them sequentially at insert time, so the stored types carry
//! no id field and tables key records by their generated id.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A product always has a seller; the buyer appears only once it is sold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub seller_id: i64,
    #[serde(default)]
    pub buyer_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
}

/// Import-side shape of a category: the name may be null in the source data,
/// and such records are dropped before they reach the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    #[serde(default)]
    pub name: Option<String>,
}

/// Many-to-many link pairing one category with one product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProduct {
    pub category_id: i64,
    pub product_id: i64,
}
