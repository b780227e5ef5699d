use actix_web::{http::StatusCode, web, web::ServiceConfig};
use serde_json::{json, Value};
use vastra_payment_engine::CartApi;

use super::{
    helpers::{cart_line, delete_request, get_request, post_request, product, put_request},
    mocks::MockCartManager,
};
use crate::cart_routes::{AddToCartRoute, CartForUserRoute, ClearCartRoute, RemoveCartItemRoute, UpdateCartItemRoute};

fn add_body(quantity: i64) -> Value {
    json!({
        "userId": "user-1",
        "productId": "VAS-KURTA-01",
        "quantity": quantity,
        "size": "M",
        "color": "Indigo",
    })
}

#[actix_web::test]
async fn added_lines_carry_the_catalog_snapshot() {
    let _ = env_logger::try_init().ok();
    let (status, body) = post_request("/cart/add", add_body(2), configure_add_ok).await;
    assert_eq!(status, StatusCode::CREATED);
    let line: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(line["productName"], "Block Print Kurta");
    assert_eq!(line["unitPrice"], 500.0);
    assert_eq!(line["quantity"], 2);
}

#[actix_web::test]
async fn unknown_products_cannot_be_added() {
    let _ = env_logger::try_init().ok();
    let (status, body) = post_request("/cart/add", add_body(2), configure_add_unknown_product).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Product not found: VAS-KURTA-01"}"#);
}

#[actix_web::test]
async fn zero_quantities_are_rejected_up_front() {
    let _ = env_logger::try_init().ok();
    let (status, body) = post_request("/cart/add", add_body(0), configure_untouched).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("quantity must be at least 1"));

    let (status, _) = put_request("/cart/update/1", json!({"quantity": 0}), configure_untouched).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn carts_are_fetched_per_user() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/cart/user/user-1", configure_fetch).await;
    assert_eq!(status, StatusCode::OK);
    let lines: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(lines.as_array().unwrap().len(), 1);
    assert_eq!(lines[0]["productId"], "VAS-KURTA-01");
}

#[actix_web::test]
async fn quantity_updates_return_the_new_line() {
    let _ = env_logger::try_init().ok();
    let (status, body) = put_request("/cart/update/1", json!({"quantity": 5}), configure_update).await;
    assert_eq!(status, StatusCode::OK);
    let line: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(line["quantity"], 5);
}

#[actix_web::test]
async fn removing_a_missing_line_is_a_404() {
    let _ = env_logger::try_init().ok();
    let (status, body) = delete_request("/cart/remove/1", configure_remove).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Cart item removed"));

    let (status, _) = delete_request("/cart/remove/999", configure_remove).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn clearing_a_cart_reports_success() {
    let _ = env_logger::try_init().ok();
    let (status, body) = delete_request("/cart/clear/user-1", configure_clear).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Cart cleared successfully"));
}

fn register(cfg: &mut ServiceConfig, db: MockCartManager) {
    let api = CartApi::new(db);
    cfg.service(AddToCartRoute::<MockCartManager>::new())
        .service(CartForUserRoute::<MockCartManager>::new())
        .service(UpdateCartItemRoute::<MockCartManager>::new())
        .service(RemoveCartItemRoute::<MockCartManager>::new())
        .service(ClearCartRoute::<MockCartManager>::new())
        .app_data(web::Data::new(api));
}

fn configure_add_ok(cfg: &mut ServiceConfig) {
    let mut db = MockCartManager::new();
    db.expect_fetch_product().returning(|_| Ok(Some(product())));
    db.expect_upsert_cart_item().returning(|_, _| Ok(cart_line()));
    register(cfg, db);
}

fn configure_add_unknown_product(cfg: &mut ServiceConfig) {
    let mut db = MockCartManager::new();
    db.expect_fetch_product().returning(|_| Ok(None));
    db.expect_upsert_cart_item().never();
    register(cfg, db);
}

fn configure_untouched(cfg: &mut ServiceConfig) {
    let mut db = MockCartManager::new();
    db.expect_fetch_product().never();
    db.expect_update_cart_quantity().never();
    register(cfg, db);
}

fn configure_fetch(cfg: &mut ServiceConfig) {
    let mut db = MockCartManager::new();
    db.expect_fetch_cart_items().returning(|_| Ok(vec![cart_line()]));
    register(cfg, db);
}

fn configure_update(cfg: &mut ServiceConfig) {
    let mut db = MockCartManager::new();
    db.expect_update_cart_quantity().returning(|_, quantity| {
        let mut line = cart_line();
        line.quantity = quantity;
        Ok(line)
    });
    register(cfg, db);
}

fn configure_remove(cfg: &mut ServiceConfig) {
    let mut db = MockCartManager::new();
    db.expect_remove_cart_item().returning(|id| Ok(id == 1));
    register(cfg, db);
}

fn configure_clear(cfg: &mut ServiceConfig) {
    let mut db = MockCartManager::new();
    db.expect_clear_cart().returning(|_| Ok(2));
    register(cfg, db);
}
