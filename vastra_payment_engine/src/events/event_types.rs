use crate::db_types::{FullOrder, OrderStatus};

/// Emitted once per order, when checkout persists it. Idempotent replays of a checkout do not re-emit the event.
#[derive(Debug, Clone)]
pub struct OrderPlacedEvent {
    pub order: FullOrder,
}

impl OrderPlacedEvent {
    pub fn new(order: FullOrder) -> Self {
        Self { order }
    }
}

/// Emitted when an admin moves an order to a different fulfilment status. Setting the status an order already has
/// is a no-op and does not emit.
#[derive(Debug, Clone)]
pub struct OrderStatusChangedEvent {
    pub old_status: OrderStatus,
    pub order: FullOrder,
}

impl OrderStatusChangedEvent {
    pub fn new(old_status: OrderStatus, order: FullOrder) -> Self {
        Self { old_status, order }
    }
}
