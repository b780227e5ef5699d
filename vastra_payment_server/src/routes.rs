//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! A note about performance:
//! Since each worker thread processes its requests sequentially, handlers which block the current thread will cause
//! the current worker to stop processing new requests. For this reason, any long, non-cpu-bound operation (e.g.
//! I/O, database operations, etc.) should be expressed as futures or asynchronous functions. Async handlers get
//! executed concurrently by worker threads and thus don't block execution.
use actix_web::{get, web, HttpResponse, Responder};
use log::*;
use razorpay_tools::{new_receipt_id, PaymentSignature, RazorpayApi, RazorpayConfig};
use vastra_payment_engine::{
    db_types::{CheckoutRequest, NewAddress, OrderStatus},
    traits::{AddressManagement, CheckoutDatabase, OrderManagement},
    AddressApi,
    CheckoutApi,
    OrderApi,
};
use vpg_common::Rupees;

use crate::{
    data_objects::{
        CreatePaymentOrderRequest,
        CreatePaymentOrderResponse,
        PlaceOrderRequest,
        SaveAddressRequest,
        StatusUpdateRequest,
        VerifyPaymentRequest,
        VerifyPaymentResponse,
    },
    errors::ServerError,
};

// Actix cannot handle generics in handlers, so the `route!` macro generates a non-generic `HttpServiceFactory`
// for each (handler, backend) pair.
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]<A>(core::marker::PhantomData<fn() -> A>);}
        paste::paste! { impl<A> [<$name:camel Route>]<A> {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self(core::marker::PhantomData::<fn() -> A>)
            }
        }}
        paste::paste! { impl<A> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<A>
        where A: $($bounds +)+ 'static,
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::<A>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//--------------------------------------   Create payment order  -----------------------------------------------
/// Route handler for creating a payment-gateway order.
///
/// The browser client posts the checkout amount here before opening the gateway's checkout widget. The response
/// carries the gateway order id and the public key id the widget needs. The amount is converted to integer paise
/// at this boundary; everything the gateway sees is minor units.
pub async fn create_payment_order(
    api: web::Data<RazorpayApi>,
    body: web::Json<CreatePaymentOrderRequest>,
) -> Result<HttpResponse, ServerError> {
    let req = body.into_inner();
    if req.user_id.trim().is_empty() {
        return Err(ServerError::ValidationError("userId and amount are required".to_string()));
    }
    let amount = Rupees::from_decimal(req.amount).map_err(|e| ServerError::ValidationError(e.to_string()))?;
    if amount.value() <= 0 {
        return Err(ServerError::ValidationError(format!("amount must be positive, got {}", req.amount)));
    }
    let receipt = new_receipt_id();
    debug!("💳️ Creating gateway order of {amount} for user {}", req.user_id);
    let order = api.create_order(amount, &receipt, &req.user_id).await?;
    let response = CreatePaymentOrderResponse {
        order_id: order.id,
        amount: order.amount,
        currency: order.currency,
        key_id: api.key_id().to_string(),
    };
    Ok(HttpResponse::Ok().json(response))
}

//--------------------------------------     Verify payment      -----------------------------------------------
/// Route handler for payment signature verification.
///
/// Recomputes the HMAC over the gateway order and payment ids and reports whether it matches the supplied
/// signature. A mismatch is a `verified: false` response, not an error; only missing fields are rejected outright.
pub async fn verify_payment(
    config: web::Data<RazorpayConfig>,
    body: web::Json<VerifyPaymentRequest>,
) -> Result<HttpResponse, ServerError> {
    let req = body.into_inner();
    if req.razorpay_order_id.is_empty() || req.razorpay_payment_id.is_empty() || req.razorpay_signature.is_empty() {
        return Err(ServerError::ValidationError("All payment verification fields are required".to_string()));
    }
    let signature = PaymentSignature::new(&req.razorpay_order_id, &req.razorpay_payment_id, &req.razorpay_signature);
    let verified = signature.is_valid(&config.key_secret);
    if verified {
        trace!("💳️ Signature verified for gateway order {}", req.razorpay_order_id);
    } else {
        warn!("💳️ Invalid payment signature supplied for gateway order {}", req.razorpay_order_id);
    }
    Ok(HttpResponse::Ok().json(VerifyPaymentResponse { verified }))
}

//--------------------------------------      Place order        -----------------------------------------------
route!(place_order => Post "/orders/place" impl CheckoutDatabase);
/// Route handler for order placement.
///
/// The payment signature is re-verified here, as a precondition, even though clients are expected to have called
/// `/orders/verify-payment` already. Placement must never depend on the caller remembering to sequence the two
/// requests. After that the engine takes over: the claimed total is checked against current catalog prices and the
/// order and cart-clear commit atomically.
pub async fn place_order<B: CheckoutDatabase + 'static>(
    api: web::Data<CheckoutApi<B>>,
    config: web::Data<RazorpayConfig>,
    body: web::Json<PlaceOrderRequest>,
) -> Result<HttpResponse, ServerError> {
    let req = body.into_inner();
    trace!("💻️ Order placement request received for user {}", req.user_id);
    if req.user_id.trim().is_empty() {
        return Err(ServerError::ValidationError("userId is required".to_string()));
    }
    let claimed_total =
        Rupees::from_decimal(req.total_amount).map_err(|e| ServerError::ValidationError(e.to_string()))?;
    let signature = PaymentSignature::new(&req.razorpay_order_id, &req.razorpay_payment_id, &req.razorpay_signature);
    if !signature.is_valid(&config.key_secret) {
        warn!("💳️ Rejecting order placement for user {}: payment signature is invalid", req.user_id);
        return Err(ServerError::InvalidPaymentSignature);
    }
    let request = CheckoutRequest::new(
        &req.user_id,
        claimed_total,
        &req.razorpay_order_id,
        &req.razorpay_payment_id,
        req.shipping_address_id,
    );
    let order = api.place_order(request).await?;
    Ok(HttpResponse::Created().json(order))
}

//--------------------------------------    Order status update   ----------------------------------------------
route!(update_order_status => Put "/orders/{id}/status" impl CheckoutDatabase);
/// Route handler for admin status updates. The status string must be one of the five known values; the engine
/// accepts any transition, including backwards ones.
pub async fn update_order_status<B: CheckoutDatabase + 'static>(
    api: web::Data<CheckoutApi<B>>,
    path: web::Path<i64>,
    body: web::Json<StatusUpdateRequest>,
) -> Result<HttpResponse, ServerError> {
    let order_id = path.into_inner();
    let status = body.status.parse::<OrderStatus>()?;
    let order = api.update_order_status(order_id, status).await?;
    Ok(HttpResponse::Ok().json(order))
}

//--------------------------------------      Order queries       ----------------------------------------------
route!(order_by_id => Get "/orders/{id}" impl OrderManagement);
pub async fn order_by_id<B: OrderManagement + 'static>(
    api: web::Data<OrderApi<B>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServerError> {
    let order_id = path.into_inner();
    let order =
        api.order_by_id(order_id).await?.ok_or_else(|| ServerError::NoRecordFound(format!("Order {order_id}")))?;
    Ok(HttpResponse::Ok().json(order))
}

route!(orders_for_user => Get "/orders/user/{user_id}" impl OrderManagement);
pub async fn orders_for_user<B: OrderManagement + 'static>(
    api: web::Data<OrderApi<B>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServerError> {
    let user_id = path.into_inner();
    let orders = api.orders_for_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(orders))
}

route!(all_orders => Get "/orders" impl OrderManagement);
/// The admin order listing. Authentication for the admin console lives in front of this server and is out of
/// scope here.
pub async fn all_orders<B: OrderManagement + 'static>(
    api: web::Data<OrderApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let orders = api.all_orders().await?;
    Ok(HttpResponse::Ok().json(orders))
}

//--------------------------------------       Addresses          ----------------------------------------------
route!(save_address => Post "/orders/address" impl AddressManagement);
pub async fn save_address<B: AddressManagement + 'static>(
    api: web::Data<AddressApi<B>>,
    body: web::Json<SaveAddressRequest>,
) -> Result<HttpResponse, ServerError> {
    let req = body.into_inner();
    let all_present = [&req.user_id, &req.street, &req.city, &req.state, &req.postal_code, &req.country]
        .iter()
        .all(|f| !f.trim().is_empty());
    if !all_present {
        return Err(ServerError::ValidationError("All address fields are required".to_string()));
    }
    let address = api.save_address(NewAddress::from(req)).await?;
    Ok(HttpResponse::Ok().json(address))
}

route!(address_for_user => Get "/orders/address/{user_id}" impl AddressManagement);
pub async fn address_for_user<B: AddressManagement + 'static>(
    api: web::Data<AddressApi<B>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServerError> {
    let user_id = path.into_inner();
    let address = api
        .address_for_user(&user_id)
        .await?
        .ok_or_else(|| ServerError::NoRecordFound(format!("Address for user {user_id}")))?;
    Ok(HttpResponse::Ok().json(address))
}
