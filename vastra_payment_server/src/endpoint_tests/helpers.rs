use actix_web::{body::MessageBody, http::StatusCode, test, test::TestRequest, web::ServiceConfig, App};
use chrono::Utc;
use razorpay_tools::RazorpayConfig;
use serde_json::Value;
use vastra_payment_engine::db_types::{
    CartItem,
    FullOrder,
    Order,
    OrderItem,
    OrderStatus,
    PaymentStatus,
    Product,
    Rupees,
    ShippingAddress,
};
use vpg_common::Secret;

/// The gateway configuration used by all endpoint tests. DO NOT re-use this secret anywhere.
pub fn razorpay_config() -> RazorpayConfig {
    RazorpayConfig {
        key_id: "rzp_test_vastra".to_string(),
        key_secret: Secret::new("test-secret-key".to_string()),
        base_url: "https://api.razorpay.invalid".to_string(),
    }
}

pub async fn get_request(path: &str, configure: fn(&mut ServiceConfig)) -> (StatusCode, String) {
    let req = TestRequest::get().uri(path).to_request();
    let service = test::init_service(App::new().configure(configure)).await;
    let res = test::call_service(&service, req).await;
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    (status, body)
}

pub async fn post_request(path: &str, body: Value, configure: fn(&mut ServiceConfig)) -> (StatusCode, String) {
    let req = TestRequest::post().uri(path).set_json(body).to_request();
    let service = test::init_service(App::new().configure(configure)).await;
    let res = test::call_service(&service, req).await;
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    (status, body)
}

pub async fn put_request(path: &str, body: Value, configure: fn(&mut ServiceConfig)) -> (StatusCode, String) {
    let req = TestRequest::put().uri(path).set_json(body).to_request();
    let service = test::init_service(App::new().configure(configure)).await;
    let res = test::call_service(&service, req).await;
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    (status, body)
}

pub async fn delete_request(path: &str, configure: fn(&mut ServiceConfig)) -> (StatusCode, String) {
    let req = TestRequest::delete().uri(path).to_request();
    let service = test::init_service(App::new().configure(configure)).await;
    let res = test::call_service(&service, req).await;
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    (status, body)
}

// Mock fixtures. The values mirror the worked checkout example: 2x500 + 1x300 = 1300 rupees.

pub fn shipping_address() -> ShippingAddress {
    ShippingAddress {
        street: "14 MG Road".to_string(),
        city: "Bengaluru".to_string(),
        state: "Karnataka".to_string(),
        postal_code: "560001".to_string(),
        country: "India".to_string(),
    }
}

pub fn full_order() -> FullOrder {
    let now = Utc::now();
    FullOrder {
        order: Order {
            id: 1,
            order_number: "ORD-100000".to_string(),
            user_id: "user-1".to_string(),
            total_amount: Rupees::from_rupees(1300),
            shipping_address: shipping_address(),
            status: OrderStatus::Pending,
            payment_method: "razorpay".to_string(),
            payment_status: PaymentStatus::Paid,
            razorpay_order_id: "order_rzp_100".to_string(),
            razorpay_payment_id: "pay_rzp_100".to_string(),
            order_date: now,
            updated_at: now,
        },
        items: vec![
            OrderItem {
                id: 1,
                order_id: 1,
                product_id: "VAS-KURTA-01".to_string(),
                product_name: "Block Print Kurta".to_string(),
                quantity: 2,
                unit_price: Rupees::from_rupees(500),
                line_total: Rupees::from_rupees(1000),
                size: "M".to_string(),
                color: "Indigo".to_string(),
            },
            OrderItem {
                id: 2,
                order_id: 1,
                product_id: "2".to_string(),
                product_name: "Chanderi Saree".to_string(),
                quantity: 1,
                unit_price: Rupees::from_rupees(300),
                line_total: Rupees::from_rupees(300),
                size: "Free".to_string(),
                color: "Maroon".to_string(),
            },
        ],
    }
}

pub fn product() -> Product {
    let now = Utc::now();
    Product {
        id: 1,
        sku: "VAS-KURTA-01".to_string(),
        name: "Block Print Kurta".to_string(),
        description: None,
        price: Rupees::from_rupees(500),
        image_url: Some("https://cdn.vastra.in/kurta.jpg".to_string()),
        in_stock: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn cart_line() -> CartItem {
    let now = Utc::now();
    CartItem {
        id: 1,
        user_id: "user-1".to_string(),
        product_id: "VAS-KURTA-01".to_string(),
        product_name: "Block Print Kurta".to_string(),
        unit_price: Rupees::from_rupees(500),
        image_url: Some("https://cdn.vastra.in/kurta.jpg".to_string()),
        quantity: 2,
        size: "M".to_string(),
        color: "Indigo".to_string(),
        created_at: now,
        updated_at: now,
    }
}
