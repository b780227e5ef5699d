#![allow(dead_code)]
use vastra_payment_engine::{
    db_types::{Address, NewAddress, NewCartItem, NewProduct, Product, Rupees},
    test_utils::prepare_env::{prepare_test_env, random_db_path},
    traits::{AddressManagement, CatalogManagement},
    CartApi,
    SqliteDatabase,
};

pub async fn new_test_db() -> SqliteDatabase {
    let url = random_db_path();
    prepare_test_env(&url).await;
    SqliteDatabase::new_with_url(&url, 5).await.expect("Error creating database")
}

/// Seeds the catalog with the two products the checkout scenarios use: a 500 rupee kurta and a 300 rupee saree.
pub async fn seed_catalog(db: &SqliteDatabase) -> (Product, Product) {
    let kurta = db
        .upsert_product(&NewProduct::new("VAS-KURTA-01", "Block Print Kurta", Rupees::from_rupees(500)))
        .await
        .expect("Error seeding catalog");
    let saree = db
        .upsert_product(&NewProduct::new("VAS-SAREE-02", "Chanderi Saree", Rupees::from_rupees(300)))
        .await
        .expect("Error seeding catalog");
    (kurta, saree)
}

/// Fills the user's cart with 2x kurta (referenced by SKU) and 1x saree (referenced by catalog id), so checkout has
/// to resolve both identifier schemes. Comes to 1300 rupees at the seeded prices.
pub async fn fill_cart(db: &SqliteDatabase, user_id: &str, kurta: &Product, saree: &Product) {
    let cart = CartApi::new(db.clone());
    cart.add_to_cart(NewCartItem::new(user_id, &kurta.sku, 2, "M", "Indigo")).await.expect("Error filling cart");
    cart.add_to_cart(NewCartItem::new(user_id, &saree.id.to_string(), 1, "Free", "Maroon"))
        .await
        .expect("Error filling cart");
}

pub async fn save_address(db: &SqliteDatabase, user_id: &str) -> Address {
    db.upsert_address(&NewAddress {
        user_id: user_id.to_string(),
        street: "14 MG Road".to_string(),
        city: "Bengaluru".to_string(),
        state: "Karnataka".to_string(),
        postal_code: "560001".to_string(),
        country: "India".to_string(),
    })
    .await
    .expect("Error saving address")
}
