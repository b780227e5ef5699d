use log::*;

use crate::{
    db_types::{CartItem, NewCartItem},
    traits::{CartManagement, CatalogManagement, CheckoutError, StoreApiError},
};

/// `CartApi` manages the pending cart lines for storefront users.
///
/// Adding a line resolves the product against the catalog first, so the stored snapshot (name, price, image) always
/// comes from the catalog rather than from whatever the client claims.
#[derive(Debug)]
pub struct CartApi<B> {
    db: B,
}

impl<B> CartApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> CartApi<B>
where B: CartManagement + CatalogManagement
{
    /// Adds a line to the user's cart. If the user already has a line for the same product, size and color, the
    /// quantities are merged.
    pub async fn add_to_cart(&self, item: NewCartItem) -> Result<CartItem, CheckoutError> {
        let product_ref = item.product_ref();
        let product = self
            .db
            .fetch_product(&product_ref)
            .await?
            .ok_or_else(|| CheckoutError::ProductNotFound(product_ref.to_string()))?;
        let line = self.db.upsert_cart_item(&item, &product).await?;
        debug!("🛒️ Cart line {} saved for user {}: {} x{}", line.id, line.user_id, line.product_name, line.quantity);
        Ok(line)
    }

    pub async fn cart_for_user(&self, user_id: &str) -> Result<Vec<CartItem>, StoreApiError> {
        self.db.fetch_cart_items(user_id).await
    }

    pub async fn update_quantity(&self, cart_item_id: i64, quantity: i64) -> Result<CartItem, StoreApiError> {
        if quantity < 1 {
            return Err(StoreApiError::QueryError(format!("Quantity must be at least 1, got {quantity}")));
        }
        self.db.update_cart_quantity(cart_item_id, quantity).await
    }

    pub async fn remove_item(&self, cart_item_id: i64) -> Result<bool, StoreApiError> {
        let removed = self.db.remove_cart_item(cart_item_id).await?;
        if removed {
            debug!("🛒️ Cart line {cart_item_id} removed");
        }
        Ok(removed)
    }

    pub async fn clear(&self, user_id: &str) -> Result<u64, StoreApiError> {
        let n = self.db.clear_cart(user_id).await?;
        debug!("🛒️ Cleared {n} cart lines for user {user_id}");
        Ok(n)
    }
}
