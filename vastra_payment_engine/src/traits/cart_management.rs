use crate::{
    db_types::{CartItem, NewCartItem, Product},
    traits::StoreApiError,
};

/// Management of pending cart lines. A cart line belongs to a user until checkout clears it.
#[allow(async_fn_in_trait)]
pub trait CartManagement {
    /// Inserts a cart line, snapshotting the product's name, price and image onto the line.
    ///
    /// A cart holds at most one line per `(user, product, size, color)` combination. Adding the same combination
    /// again increments the existing line's quantity rather than inserting a duplicate.
    async fn upsert_cart_item(&self, item: &NewCartItem, product: &Product) -> Result<CartItem, StoreApiError>;

    /// All cart lines for the given user, oldest first.
    async fn fetch_cart_items(&self, user_id: &str) -> Result<Vec<CartItem>, StoreApiError>;

    /// Replaces the quantity on the given cart line.
    async fn update_cart_quantity(&self, cart_item_id: i64, quantity: i64) -> Result<CartItem, StoreApiError>;

    /// Removes a single cart line. Returns false if the line did not exist.
    async fn remove_cart_item(&self, cart_item_id: i64) -> Result<bool, StoreApiError>;

    /// Deletes every cart line for the user, returning the number of lines removed.
    async fn clear_cart(&self, user_id: &str) -> Result<u64, StoreApiError>;
}
