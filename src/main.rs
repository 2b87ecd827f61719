use anyhow::Context;
use product_shop::{ShopDb, export, import};
use std::fs;
use std::path::Path;
use tracing::info;

const DATASETS_DIR: &str = "datasets";
const RESULTS_DIR: &str = "Results";
const RESULT_FILE: &str = "users-and-products.json";

fn read_dataset(name: &str) -> anyhow::Result<String> {
    fs::read_to_string(Path::new(DATASETS_DIR).join(name))
        .with_context(|| format!("reading {DATASETS_DIR}/{name}"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let mut db = ShopDb::new();

    // Imports run in dependency order: products reference users, links
    // reference categories and products.
    info!("{}", import::import_users(&mut db, &read_dataset("users.json")?)?);
    info!(
        "{}",
        import::import_products(&mut db, &read_dataset("products.json")?)?
    );
    info!(
        "{}",
        import::import_categories(&mut db, &read_dataset("categories.json")?)?
    );
    info!(
        "{}",
        import::import_category_products(&mut db, &read_dataset("categories-products.json")?)?
    );

    let json = export::users_with_sold_products(&db)?;

    fs::create_dir_all(RESULTS_DIR)?;
    let result_path = Path::new(RESULTS_DIR).join(RESULT_FILE);
    fs::write(&result_path, json)?;
    info!("wrote {}", result_path.display());

    Ok(())
}
