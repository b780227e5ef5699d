//! Cart route handlers.
//!
//! All cart handlers are generic over the engine's cart and catalog traits and follow the same shape as the order
//! handlers in [`crate::routes`].
use actix_web::{web, HttpResponse};
use log::*;
use vastra_payment_engine::{
    db_types::NewCartItem,
    traits::{CartManagement, CatalogManagement},
    CartApi,
};

use crate::{
    data_objects::{AddToCartRequest, JsonResponse, UpdateQuantityRequest},
    errors::ServerError,
    route,
};

route!(add_to_cart => Post "/cart/add" impl CartManagement, CatalogManagement);
/// Route handler for adding a line to a cart.
///
/// Clients only send the product reference and the choices the user made; the name and price stored on the line
/// are snapshotted from the catalog so a tampered client cannot fix its own prices.
pub async fn add_to_cart<B: CartManagement + CatalogManagement + 'static>(
    api: web::Data<CartApi<B>>,
    body: web::Json<AddToCartRequest>,
) -> Result<HttpResponse, ServerError> {
    let req = body.into_inner();
    if req.user_id.trim().is_empty() || req.product_id.trim().is_empty() {
        return Err(ServerError::ValidationError("userId and productId are required".to_string()));
    }
    if req.quantity < 1 {
        return Err(ServerError::ValidationError(format!("quantity must be at least 1, got {}", req.quantity)));
    }
    let line = api.add_to_cart(NewCartItem::from(req)).await?;
    Ok(HttpResponse::Created().json(line))
}

route!(cart_for_user => Get "/cart/user/{user_id}" impl CartManagement, CatalogManagement);
pub async fn cart_for_user<B: CartManagement + CatalogManagement + 'static>(
    api: web::Data<CartApi<B>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServerError> {
    let user_id = path.into_inner();
    let lines = api.cart_for_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(lines))
}

route!(update_cart_item => Put "/cart/update/{id}" impl CartManagement, CatalogManagement);
pub async fn update_cart_item<B: CartManagement + CatalogManagement + 'static>(
    api: web::Data<CartApi<B>>,
    path: web::Path<i64>,
    body: web::Json<UpdateQuantityRequest>,
) -> Result<HttpResponse, ServerError> {
    let cart_item_id = path.into_inner();
    if body.quantity < 1 {
        return Err(ServerError::ValidationError(format!("quantity must be at least 1, got {}", body.quantity)));
    }
    let line = api.update_quantity(cart_item_id, body.quantity).await?;
    Ok(HttpResponse::Ok().json(line))
}

route!(remove_cart_item => Delete "/cart/remove/{id}" impl CartManagement, CatalogManagement);
pub async fn remove_cart_item<B: CartManagement + CatalogManagement + 'static>(
    api: web::Data<CartApi<B>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServerError> {
    let cart_item_id = path.into_inner();
    if api.remove_item(cart_item_id).await? {
        Ok(HttpResponse::Ok().json(JsonResponse::success("Cart item removed")))
    } else {
        Err(ServerError::NoRecordFound(format!("Cart item {cart_item_id}")))
    }
}

route!(clear_cart => Delete "/cart/clear/{user_id}" impl CartManagement, CatalogManagement);
pub async fn clear_cart<B: CartManagement + CatalogManagement + 'static>(
    api: web::Data<CartApi<B>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServerError> {
    let user_id = path.into_inner();
    let n = api.clear(&user_id).await?;
    debug!("💻️ Cleared cart for user {user_id} ({n} lines)");
    Ok(HttpResponse::Ok().json(JsonResponse::success("Cart cleared successfully")))
}
