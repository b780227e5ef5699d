use std::fmt::Debug;

use log::*;

use crate::{
    db_types::{CheckoutRequest, FullOrder, OrderStatus},
    events::{EventProducers, OrderPlacedEvent, OrderStatusChangedEvent},
    traits::{CheckoutDatabase, CheckoutError, StoreApiError},
};

/// `CheckoutApi` is the primary API for the order placement flow and for admin status transitions.
///
/// Placement itself is delegated to the backend's atomic [`CheckoutDatabase::checkout`]; this layer adds logging
/// and event hooks on top.
pub struct CheckoutApi<B> {
    db: B,
    producers: EventProducers,
}

impl<B> Debug for CheckoutApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CheckoutApi")
    }
}

impl<B> CheckoutApi<B> {
    pub fn new(db: B, producers: EventProducers) -> Self {
        Self { db, producers }
    }
}

impl<B> CheckoutApi<B>
where B: CheckoutDatabase
{
    /// Places an order for the request's user.
    ///
    /// Callers must have verified the gateway payment signature before calling this; the engine trusts that the
    /// payment ids in the request belong to a captured payment. The claimed total, on the other hand, is *not*
    /// trusted: the backend recomputes it from current catalog prices and rejects mismatches.
    ///
    /// Replaying a checkout for a payment that already has an order is not an error. The existing order is
    /// returned and no event is fired.
    pub async fn place_order(&self, request: CheckoutRequest) -> Result<FullOrder, CheckoutError> {
        let user_id = request.user_id.clone();
        let payment_id = request.razorpay_payment_id.clone();
        let (order, created) = self.db.checkout(request).await?;
        if created {
            debug!(
                "🧾️ Order {} placed for user {user_id}. {} items, total {}",
                order.order.order_number,
                order.items.len(),
                order.order.total_amount
            );
            self.call_order_placed_hook(&order).await;
        } else {
            info!(
                "🧾️ Payment [{payment_id}] is already recorded against order {}. Returning the existing order.",
                order.order.order_number
            );
        }
        Ok(order)
    }

    /// Changes the fulfilment status of an order.
    ///
    /// Any status may follow any other, including moving backwards. This is a deliberate simplification: status
    /// changes are an authenticated admin action and the admin console is the place to make corrections. Setting
    /// the status an order already has succeeds without touching the database.
    ///
    /// Returns the order with its new status.
    pub async fn update_order_status(
        &self,
        order_id: i64,
        new_status: OrderStatus,
    ) -> Result<FullOrder, StoreApiError> {
        let current = self
            .db
            .fetch_order_by_id(order_id)
            .await?
            .ok_or_else(|| StoreApiError::NotFound(format!("order {order_id}")))?;
        let old_status = current.order.status;
        if old_status == new_status {
            debug!("📦️ Order {order_id} already has status {new_status}. Nothing to do.");
            return Ok(current);
        }
        let updated = self.db.update_order_status(order_id, new_status).await?;
        debug!("📦️ Order {order_id} moved from {old_status} to {new_status}");
        self.call_status_changed_hook(old_status, &updated).await;
        Ok(updated)
    }

    async fn call_order_placed_hook(&self, order: &FullOrder) {
        for emitter in &self.producers.order_placed_producer {
            trace!("🧾️ Notifying order placed hook subscribers");
            emitter.publish_event(OrderPlacedEvent::new(order.clone())).await;
        }
    }

    async fn call_status_changed_hook(&self, old_status: OrderStatus, order: &FullOrder) {
        for emitter in &self.producers.status_changed_producer {
            trace!("📦️ Notifying status changed hook subscribers");
            emitter.publish_event(OrderStatusChangedEvent::new(old_status, order.clone())).await;
        }
    }

    pub fn db(&self) -> &B {
        &self.db
    }
}
