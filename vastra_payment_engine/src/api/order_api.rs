use crate::{
    db_types::FullOrder,
    traits::{OrderManagement, StoreApiError},
};

/// `OrderApi` provides read access to placed orders, for order tracking and the admin console.
#[derive(Debug)]
pub struct OrderApi<B> {
    db: B,
}

impl<B> OrderApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> OrderApi<B>
where B: OrderManagement
{
    pub async fn order_by_id(&self, order_id: i64) -> Result<Option<FullOrder>, StoreApiError> {
        self.db.fetch_order_by_id(order_id).await
    }

    pub async fn orders_for_user(&self, user_id: &str) -> Result<Vec<FullOrder>, StoreApiError> {
        self.db.fetch_orders_for_user(user_id).await
    }

    pub async fn all_orders(&self) -> Result<Vec<FullOrder>, StoreApiError> {
        self.db.fetch_all_orders().await
    }
}
