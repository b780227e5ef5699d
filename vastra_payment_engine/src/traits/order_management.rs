use crate::{
    db_types::{FullOrder, OrderStatus},
    traits::StoreApiError,
};

/// Queries over placed orders, and the status update used by the admin console.
#[allow(async_fn_in_trait)]
pub trait OrderManagement {
    async fn fetch_order_by_id(&self, order_id: i64) -> Result<Option<FullOrder>, StoreApiError>;

    /// All orders for the given user, newest first.
    async fn fetch_orders_for_user(&self, user_id: &str) -> Result<Vec<FullOrder>, StoreApiError>;

    /// Every order in the store, newest first.
    async fn fetch_all_orders(&self) -> Result<Vec<FullOrder>, StoreApiError>;

    /// Sets the fulfilment status of an order. Fails with [`StoreApiError::NotFound`] if the order does not exist.
    async fn update_order_status(&self, order_id: i64, status: OrderStatus) -> Result<FullOrder, StoreApiError>;
}
