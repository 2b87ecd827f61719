use product_shop::core::ShopError;
use product_shop::import;
use product_shop::storage::ShopDb;

const USERS: &str = r#"[
    { "firstName": "Ana", "lastName": "Petrova", "age": 30, "email": "ana@example.com" },
    { "firstName": "Boris", "lastName": "Iliev", "age": 25 },
    { "firstName": "Carla", "lastName": "Mendes" }
]"#;

#[test]
fn test_import_users_returns_count_message() {
    let mut db = ShopDb::new();

    let msg = import::import_users(&mut db, USERS).unwrap();

    assert_eq!(msg, "Successfully imported 3");
    assert_eq!(db.user_count(), 3);
}

#[test]
fn test_import_categories_drops_null_names() {
    let mut db = ShopDb::new();

    let input = r#"[
        { "name": "Garden" },
        { "name": null },
        { "name": "Tools" },
        {}
    ]"#;

    let msg = import::import_categories(&mut db, input).unwrap();

    // Only the two named records are counted and stored.
    assert_eq!(msg, "Successfully imported 2");
    assert_eq!(db.category_count(), 2);

    let names: Vec<&str> = db.categories().map(|(_, c)| c.name.as_str()).collect();
    assert_eq!(names, vec!["Garden", "Tools"]);
}

#[test]
fn test_import_products_with_valid_references() {
    let mut db = ShopDb::new();
    import::import_users(&mut db, USERS).unwrap();

    let input = r#"[
        { "name": "Kettle", "price": 45.0, "sellerId": 1, "buyerId": 2 },
        { "name": "Stool", "price": 20.0, "sellerId": 3, "buyerId": null },
        { "name": "Rug", "price": 85.5, "sellerId": 2 }
    ]"#;

    let msg = import::import_products(&mut db, input).unwrap();

    assert_eq!(msg, "Successfully imported 3");
    assert_eq!(db.product_count(), 3);
}

#[test]
fn test_import_products_rejects_missing_seller() {
    let mut db = ShopDb::new();
    import::import_users(&mut db, USERS).unwrap();

    let input = r#"[
        { "name": "Kettle", "price": 45.0, "sellerId": 1 },
        { "name": "Ghost Item", "price": 10.0, "sellerId": 99 }
    ]"#;

    let res = import::import_products(&mut db, input);
    match res {
        Err(ShopError::ConstraintViolation(msg)) => {
            assert!(msg.contains("non-existent seller"));
        }
        other => panic!("expected ConstraintViolation, got {other:?}"),
    }

    // The batch is all-or-nothing: the valid row was not committed either.
    assert_eq!(db.product_count(), 0);
}

#[test]
fn test_import_products_rejects_missing_buyer() {
    let mut db = ShopDb::new();
    import::import_users(&mut db, USERS).unwrap();

    let input = r#"[{ "name": "Kettle", "price": 45.0, "sellerId": 1, "buyerId": 42 }]"#;

    let res = import::import_products(&mut db, input);
    match res {
        Err(ShopError::ConstraintViolation(msg)) => {
            assert!(msg.contains("non-existent buyer"));
        }
        other => panic!("expected ConstraintViolation, got {other:?}"),
    }
}

#[test]
fn test_import_links_does_not_validate_references() {
    let mut db = ShopDb::new();

    // Neither category 7 nor product 9 exists, and the link is accepted.
    let input = r#"[{ "categoryId": 7, "productId": 9 }]"#;

    let msg = import::import_category_products(&mut db, input).unwrap();

    assert_eq!(msg, "Successfully imported 1");
    assert_eq!(db.link_count(), 1);
}

#[test]
fn test_malformed_json_propagates() {
    let mut db = ShopDb::new();

    let res = import::import_users(&mut db, "this is not json");
    assert!(matches!(res, Err(ShopError::Json(_))));

    // A non-array document is also a deserialization error.
    let res = import::import_users(&mut db, r#"{ "firstName": "Ana" }"#);
    assert!(matches!(res, Err(ShopError::Json(_))));

    assert_eq!(db.user_count(), 0);
}
