pub mod store;
pub mod table;

pub use store::ShopDb;
pub use table::Table;
