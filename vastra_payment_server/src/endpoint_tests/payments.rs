use actix_web::{http::StatusCode, web, web::ServiceConfig};
use razorpay_tools::{calculate_signature, RazorpayApi};
use serde_json::{json, Value};

use super::helpers::{post_request, razorpay_config};
use crate::routes::{create_payment_order, verify_payment};

fn verify_body(signature: &str) -> Value {
    json!({
        "razorpayOrderId": "order_rzp_200",
        "razorpayPaymentId": "pay_rzp_200",
        "razorpaySignature": signature,
        "userId": "user-1",
    })
}

#[actix_web::test]
async fn a_correct_signature_verifies() {
    let _ = env_logger::try_init().ok();
    let signature = calculate_signature(&razorpay_config().key_secret, "order_rzp_200", "pay_rzp_200");
    let (status, body) = post_request("/orders/verify-payment", verify_body(&signature), configure).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"verified":true}"#);
}

#[actix_web::test]
async fn a_single_character_mutation_fails_verification() {
    let _ = env_logger::try_init().ok();
    let mut signature = calculate_signature(&razorpay_config().key_secret, "order_rzp_200", "pay_rzp_200");
    // Flip one hex digit
    let first = if signature.starts_with('0') { "1" } else { "0" };
    signature.replace_range(0..1, first);
    let (status, body) = post_request("/orders/verify-payment", verify_body(&signature), configure).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"verified":false}"#);
}

#[actix_web::test]
async fn missing_verification_fields_are_rejected() {
    let _ = env_logger::try_init().ok();
    let body = json!({
        "razorpayOrderId": "order_rzp_200",
        "razorpayPaymentId": "",
        "razorpaySignature": "",
    });
    let (status, body) = post_request("/orders/verify-payment", body, configure).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("All payment verification fields are required"));
}

#[actix_web::test]
async fn payment_orders_require_a_user_id() {
    let _ = env_logger::try_init().ok();
    let body = json!({ "userId": "  ", "amount": 1300.0 });
    let (status, body) = post_request("/orders/create-payment-order", body, configure).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("userId and amount are required"));
}

#[actix_web::test]
async fn payment_orders_require_a_positive_amount() {
    let _ = env_logger::try_init().ok();
    let body = json!({ "userId": "user-1", "amount": 0.0 });
    let (status, body) = post_request("/orders/create-payment-order", body, configure).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("amount must be positive"));
}

fn configure(cfg: &mut ServiceConfig) {
    let api = RazorpayApi::new(razorpay_config()).expect("Could not build gateway client");
    cfg.route("/orders/verify-payment", web::post().to(verify_payment))
        .route("/orders/create-payment-order", web::post().to(create_payment_order))
        .app_data(web::Data::new(api))
        .app_data(web::Data::new(razorpay_config()));
}
