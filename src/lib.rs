// ============================================================================
// Product Shop Library
// ============================================================================

pub mod core;
pub mod export;
pub mod import;
pub mod models;
pub mod storage;

// Re-export main types for convenience
pub use crate::core::{Result, ShopError};
pub use crate::models::{Category, CategoryProduct, Product, User};
pub use crate::storage::ShopDb;
