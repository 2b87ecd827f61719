//! Read-only query/export functions.
//!
//! Six independent projections over the store. Each one filters, joins
//! through explicit foreign-key lookups, sorts, shapes an output document,
//! and serializes it to indented JSON.

use crate::core::Result;
use crate::storage::ShopDb;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ProductInRange {
    name: String,
    price: f64,
    seller: String,
}

/// Products priced in [500, 1000] inclusive, ascending by price, with the
/// seller's full name.
pub fn products_in_range(db: &ShopDb) -> Result<String> {
    let mut rows = db
        .products()
        .filter(|(_, p)| p.price >= 500.0 && p.price <= 1000.0)
        .map(|(_, p)| {
            let seller = db.user(p.seller_id)?;
            Ok(ProductInRange {
                name: p.name.clone(),
                price: p.price,
                seller: format!("{} {}", seller.first_name, seller.last_name),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    rows.sort_by(|a, b| a.price.total_cmp(&b.price));

    Ok(serde_json::to_string_pretty(&rows)?)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SoldProduct {
    name: String,
    price: f64,
    buyer_first_name: String,
    buyer_last_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SellerEntry {
    first_name: String,
    last_name: String,
    sold_products: Vec<SoldProduct>,
}

/// Users who sold at least one product (buyer present), ordered by last then
/// first name, each with their sold products and the buyer's name.
pub fn users_sold_products(db: &ShopDb) -> Result<String> {
    let mut users: Vec<(i64, &crate::models::User)> = db.users().collect();
    users.sort_by(|a, b| {
        a.1.last_name
            .cmp(&b.1.last_name)
            .then_with(|| a.1.first_name.cmp(&b.1.first_name))
    });

    let mut entries = Vec::new();
    for (id, user) in users {
        let mut sold = Vec::new();
        for (_, product) in db.products_sold_by(id) {
            if let Some(buyer_id) = product.buyer_id {
                let buyer = db.user(buyer_id)?;
                sold.push(SoldProduct {
                    name: product.name.clone(),
                    price: product.price,
                    buyer_first_name: buyer.first_name.clone(),
                    buyer_last_name: buyer.last_name.clone(),
                });
            }
        }
        if sold.is_empty() {
            continue;
        }
        entries.push(SellerEntry {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            sold_products: sold,
        });
    }

    Ok(serde_json::to_string_pretty(&entries)?)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CategorySummary {
    category: String,
    product_count: usize,
    average_price: String,
    total_revenue: String,
}

/// Categories descending by linked product count, with currency aggregates
/// formatted to two decimal places. A category with no resolvable products
/// reports "0.00" for both aggregates.
pub fn categories_by_product_count(db: &ShopDb) -> Result<String> {
    let mut rows: Vec<CategorySummary> = db
        .categories()
        .map(|(id, category)| {
            let prices: Vec<f64> = db.products_in(id).map(|p| p.price).collect();
            let total: f64 = prices.iter().sum();
            let average = if prices.is_empty() {
                0.0
            } else {
                total / prices.len() as f64
            };
            CategorySummary {
                category: category.name.clone(),
                product_count: prices.len(),
                average_price: format!("{average:.2}"),
                total_revenue: format!("{total:.2}"),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.product_count.cmp(&a.product_count));

    Ok(serde_json::to_string_pretty(&rows)?)
}

#[derive(Debug, Serialize)]
struct SoldListing {
    name: String,
    price: f64,
}

#[derive(Debug, Serialize)]
struct SoldSummary {
    count: usize,
    products: Vec<SoldListing>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UserEntry {
    last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    age: Option<u32>,
    sold_products: SoldSummary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UsersReport {
    user_count: usize,
    users: Vec<UserEntry>,
}

/// The primary export: users with at least one sold product, descending by
/// sold-product count, wrapped in a `{userCount, users}` envelope. Absent
/// ages are omitted from the output rather than serialized as null.
pub fn users_with_sold_products(db: &ShopDb) -> Result<String> {
    let mut users = Vec::new();
    for (id, user) in db.users() {
        let sold: Vec<SoldListing> = db
            .products_sold_by(id)
            .filter(|(_, p)| p.buyer_id.is_some())
            .map(|(_, p)| SoldListing {
                name: p.name.clone(),
                price: p.price,
            })
            .collect();
        if sold.is_empty() {
            continue;
        }
        users.push(UserEntry {
            last_name: user.last_name.clone(),
            age: user.age,
            sold_products: SoldSummary {
                count: sold.len(),
                products: sold,
            },
        });
    }

    users.sort_by(|a, b| b.sold_products.count.cmp(&a.sold_products.count));

    let report = UsersReport {
        user_count: users.len(),
        users,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordCounts {
    users: usize,
    products: usize,
    categories: usize,
    category_products: usize,
}

/// Per-table row counts.
pub fn record_counts(db: &ShopDb) -> Result<String> {
    let counts = RecordCounts {
        users: db.user_count(),
        products: db.product_count(),
        categories: db.category_count(),
        category_products: db.link_count(),
    };
    Ok(serde_json::to_string_pretty(&counts)?)
}

/// Products still without a buyer, ascending by name.
pub fn unsold_products(db: &ShopDb) -> Result<String> {
    let mut rows: Vec<SoldListing> = db
        .products()
        .filter(|(_, p)| p.buyer_id.is_none())
        .map(|(_, p)| SoldListing {
            name: p.name.clone(),
            price: p.price,
        })
        .collect();

    rows.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(serde_json::to_string_pretty(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_empty_category_reports_zero_aggregates() {
        let mut db = ShopDb::new();
        db.insert_categories(vec![Category {
            name: "Bare".to_string(),
        }])
        .unwrap();

        let json = categories_by_product_count(&db).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(doc[0]["productCount"], 0);
        assert_eq!(doc[0]["averagePrice"], "0.00");
        assert_eq!(doc[0]["totalRevenue"], "0.00");
    }

    #[test]
    fn test_whole_number_prices_keep_two_decimals() {
        assert_eq!(format!("{:.2}", 1500.0_f64), "1500.00");
        assert_eq!(format!("{:.2}", 916.753_f64), "916.75");
    }
}
