use actix_web::{http::StatusCode, web, web::ServiceConfig};
use razorpay_tools::calculate_signature;
use serde_json::{json, Value};
use vastra_payment_engine::{
    db_types::Rupees,
    events::EventProducers,
    traits::CheckoutError,
    CheckoutApi,
    OrderApi,
};

use super::{
    helpers::{full_order, get_request, post_request, put_request, razorpay_config},
    mocks::{MockCheckoutManager, MockOrderManager},
};
use crate::routes::{OrderByIdRoute, OrdersForUserRoute, PlaceOrderRoute, UpdateOrderStatusRoute};

fn place_order_body(signature: &str) -> Value {
    json!({
        "userId": "user-1",
        "totalAmount": 1300.0,
        "razorpayOrderId": "order_rzp_100",
        "razorpayPaymentId": "pay_rzp_100",
        "razorpaySignature": signature,
        "shippingAddressId": 1,
    })
}

fn valid_signature() -> String {
    calculate_signature(&razorpay_config().key_secret, "order_rzp_100", "pay_rzp_100")
}

#[actix_web::test]
async fn placing_an_order_returns_the_persisted_record() {
    let _ = env_logger::try_init().ok();
    let (status, body) = post_request("/orders/place", place_order_body(&valid_signature()), configure_place_ok).await;
    assert_eq!(status, StatusCode::CREATED);
    let order: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(order["orderNumber"], "ORD-100000");
    assert_eq!(order["totalAmount"], 1300.0);
    assert_eq!(order["paymentStatus"], "paid");
    assert_eq!(order["items"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn a_tampered_signature_never_reaches_the_engine() {
    let _ = env_logger::try_init().ok();
    let mut signature = valid_signature();
    signature.replace_range(0..4, "0000");
    let (status, body) = post_request("/orders/place", place_order_body(&signature), configure_place_never).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Invalid payment signature"}"#);
}

#[actix_web::test]
async fn total_mismatches_report_both_totals() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        post_request("/orders/place", place_order_body(&valid_signature()), configure_place_mismatch).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let payload: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(payload["message"], "Total amount mismatch");
    assert_eq!(payload["calculated"], 1400.0);
    assert_eq!(payload["provided"], 1300.0);
}

#[actix_web::test]
async fn an_empty_cart_cannot_be_checked_out() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        post_request("/orders/place", place_order_body(&valid_signature()), configure_place_empty_cart).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Cart is empty"}"#);
}

#[actix_web::test]
async fn orders_can_be_fetched_by_id() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/orders/1", configure_queries).await;
    assert_eq!(status, StatusCode::OK);
    let order: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(order["orderNumber"], "ORD-100000");
    assert_eq!(order["shippingAddress"]["city"], "Bengaluru");

    let (status, _) = get_request("/orders/999", configure_queries).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn user_order_history_is_returned_as_a_list() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/orders/user/user-1", configure_queries).await;
    assert_eq!(status, StatusCode::OK);
    let orders: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(orders.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn status_updates_round_trip() {
    let _ = env_logger::try_init().ok();
    let (status, body) = put_request("/orders/1/status", json!({"status": "shipped"}), configure_status).await;
    assert_eq!(status, StatusCode::OK);
    let order: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(order["status"], "shipped");
}

#[actix_web::test]
async fn unknown_status_strings_are_rejected() {
    let _ = env_logger::try_init().ok();
    let (status, body) = put_request("/orders/1/status", json!({"status": "bogus"}), configure_status_never).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Invalid order status: bogus"}"#);
}

#[actix_web::test]
async fn updating_a_missing_order_is_a_404() {
    let _ = env_logger::try_init().ok();
    let (status, _) = put_request("/orders/999/status", json!({"status": "shipped"}), configure_status_missing).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

fn register_place(cfg: &mut ServiceConfig, db: MockCheckoutManager) {
    let api = CheckoutApi::new(db, EventProducers::default());
    cfg.service(PlaceOrderRoute::<MockCheckoutManager>::new())
        .service(UpdateOrderStatusRoute::<MockCheckoutManager>::new())
        .app_data(web::Data::new(api))
        .app_data(web::Data::new(razorpay_config()));
}

fn configure_place_ok(cfg: &mut ServiceConfig) {
    let mut db = MockCheckoutManager::new();
    db.expect_checkout().returning(|_| Ok((full_order(), true)));
    register_place(cfg, db);
}

fn configure_place_never(cfg: &mut ServiceConfig) {
    let mut db = MockCheckoutManager::new();
    db.expect_checkout().never();
    register_place(cfg, db);
}

fn configure_place_mismatch(cfg: &mut ServiceConfig) {
    let mut db = MockCheckoutManager::new();
    db.expect_checkout().returning(|_| {
        Err(CheckoutError::TotalMismatch {
            calculated: Rupees::from_rupees(1400),
            provided: Rupees::from_rupees(1300),
        })
    });
    register_place(cfg, db);
}

fn configure_place_empty_cart(cfg: &mut ServiceConfig) {
    let mut db = MockCheckoutManager::new();
    db.expect_checkout().returning(|_| Err(CheckoutError::EmptyCart));
    register_place(cfg, db);
}

fn configure_queries(cfg: &mut ServiceConfig) {
    let mut db = MockOrderManager::new();
    db.expect_fetch_order_by_id().returning(|id| if id == 1 { Ok(Some(full_order())) } else { Ok(None) });
    db.expect_fetch_orders_for_user().returning(|_| Ok(vec![full_order()]));
    let api = OrderApi::new(db);
    cfg.service(OrdersForUserRoute::<MockOrderManager>::new())
        .service(OrderByIdRoute::<MockOrderManager>::new())
        .app_data(web::Data::new(api));
}

fn configure_status(cfg: &mut ServiceConfig) {
    let mut db = MockCheckoutManager::new();
    db.expect_fetch_order_by_id().returning(|_| Ok(Some(full_order())));
    db.expect_update_order_status().returning(|_, status| {
        let mut order = full_order();
        order.order.status = status;
        Ok(order)
    });
    register_place(cfg, db);
}

fn configure_status_never(cfg: &mut ServiceConfig) {
    let mut db = MockCheckoutManager::new();
    db.expect_fetch_order_by_id().never();
    db.expect_update_order_status().never();
    register_place(cfg, db);
}

fn configure_status_missing(cfg: &mut ServiceConfig) {
    let mut db = MockCheckoutManager::new();
    db.expect_fetch_order_by_id().returning(|_| Ok(None));
    db.expect_update_order_status().never();
    register_place(cfg, db);
}
