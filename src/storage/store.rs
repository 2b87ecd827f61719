use super::table::Table;
use crate::core::{Result, ShopError};
use crate::models::{Category, CategoryProduct, Product, User};

/// The in-memory shop store: one table per record kind plus the
/// category-product link rows.
///
/// Relationship navigation is explicit: instead of lazy `Seller` / `Buyer` /
/// `CategoryProducts` proxies, callers join through `user`,
/// `products_sold_by`, and `products_in`.
///
/// Records are created only by bulk insert; there are no update or delete
/// operations, and all queries are read-only.
#[derive(Debug, Default)]
pub struct ShopDb {
    users: Table<User>,
    products: Table<Product>,
    categories: Table<Category>,
    links: Vec<CategoryProduct>,
}

impl ShopDb {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Bulk inserts ====================

    /// Insert a batch of users. Returns the number inserted.
    pub fn insert_users(&mut self, batch: Vec<User>) -> Result<usize> {
        let count = batch.len();
        for user in batch {
            self.users.insert(user);
        }
        Ok(count)
    }

    /// Insert a batch of products.
    ///
    /// Every seller id, and every buyer id that is present, must reference an
    /// existing user. Checks run over the whole batch before any row is
    /// committed, so a failing batch leaves the store untouched.
    pub fn insert_products(&mut self, batch: Vec<Product>) -> Result<usize> {
        for product in &batch {
            if !self.users.contains(product.seller_id) {
                return Err(ShopError::ConstraintViolation(format!(
                    "product '{}' references non-existent seller {}",
                    product.name, product.seller_id
                )));
            }
            if let Some(buyer_id) = product.buyer_id
                && !self.users.contains(buyer_id)
            {
                return Err(ShopError::ConstraintViolation(format!(
                    "product '{}' references non-existent buyer {}",
                    product.name, buyer_id
                )));
            }
        }

        let count = batch.len();
        for product in batch {
            self.products.insert(product);
        }
        Ok(count)
    }

    /// Insert a batch of categories. Null-name filtering happens at import;
    /// by the time records reach the store every name is present.
    pub fn insert_categories(&mut self, batch: Vec<Category>) -> Result<usize> {
        let count = batch.len();
        for category in batch {
            self.categories.insert(category);
        }
        Ok(count)
    }

    /// Insert a batch of category-product links.
    ///
    /// The referenced ids are NOT validated, mirroring the source system:
    /// links may dangle, and readers resolve them leniently.
    pub fn insert_links(&mut self, batch: Vec<CategoryProduct>) -> Result<usize> {
        let count = batch.len();
        self.links.extend(batch);
        Ok(count)
    }

    // ==================== Lookups ====================

    pub fn user(&self, id: i64) -> Result<&User> {
        self.users
            .get(id)
            .ok_or_else(|| ShopError::NotFound(format!("user {id}")))
    }

    pub fn users(&self) -> impl Iterator<Item = (i64, &User)> {
        self.users.scan()
    }

    pub fn products(&self) -> impl Iterator<Item = (i64, &Product)> {
        self.products.scan()
    }

    pub fn categories(&self) -> impl Iterator<Item = (i64, &Category)> {
        self.categories.scan()
    }

    /// Products a user has put up for sale, sold or not.
    pub fn products_sold_by(&self, seller_id: i64) -> impl Iterator<Item = (i64, &Product)> {
        self.products
            .scan()
            .filter(move |(_, p)| p.seller_id == seller_id)
    }

    /// Products linked to a category. Links whose product id does not resolve
    /// are skipped.
    pub fn products_in(&self, category_id: i64) -> impl Iterator<Item = &Product> {
        self.links
            .iter()
            .filter(move |link| link.category_id == category_id)
            .filter_map(|link| self.products.get(link.product_id))
    }

    // ==================== Counts ====================

    pub fn user_count(&self) -> usize {
        self.users.row_count()
    }

    pub fn product_count(&self) -> usize {
        self.products.row_count()
    }

    pub fn category_count(&self) -> usize {
        self.categories.row_count()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}
