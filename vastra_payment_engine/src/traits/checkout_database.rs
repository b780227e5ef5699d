use thiserror::Error;
use vpg_common::Rupees;

use crate::{
    db_types::{CheckoutRequest, FullOrder},
    traits::{OrderManagement, StoreApiError},
};

/// How far the claimed total may drift from the computed total, in paise. One paisa absorbs decimal rounding on
/// the wire and nothing else.
pub const TOTAL_TOLERANCE_PAISE: i64 = 1;

/// This trait defines the highest level of behaviour for backends supporting the payment engine: the checkout flow
/// that turns a cart into a durable order.
#[allow(async_fn_in_trait)]
pub trait CheckoutDatabase: OrderManagement {
    /// The URL of the database
    fn url(&self) -> &str;

    /// Runs the full checkout flow in a single atomic transaction:
    ///
    /// 1. If an order already exists for the request's gateway payment id, it is returned with the second element
    ///    set to `false` and nothing else happens. The payment id is the idempotency key; a replayed or racing
    ///    checkout cannot create a second order for the same payment.
    /// 2. The user's cart lines are loaded ([`CheckoutError::EmptyCart`] if there are none).
    /// 3. The shipping address is loaded by id ([`CheckoutError::AddressNotFound`] if absent).
    /// 4. Every cart line's product reference is resolved against the catalog, trying both identifier schemes
    ///    ([`CheckoutError::ProductNotFound`] names the first id that resolves to nothing).
    /// 5. Line totals are computed from *current* catalog prices and summed. If the sum differs from the claimed
    ///    total by more than one paisa, the whole transaction fails with [`CheckoutError::TotalMismatch`] carrying
    ///    both values.
    /// 6. The order and its line items are inserted (`payment_status = paid`, address fields copied), and the
    ///    user's cart is cleared. Both commit together: a crash mid-flow leaves the cart and the order table
    ///    untouched.
    ///
    /// Returns the persisted order and `true` if this call created it.
    async fn checkout(&self, request: CheckoutRequest) -> Result<(FullOrder, bool), CheckoutError>;
}

/// What can go wrong between "the user clicked pay" and "the order row exists". Everything here is request-scoped;
/// nothing is retried automatically.
#[derive(Debug, Clone, Error)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Shipping address {0} not found")]
    AddressNotFound(i64),
    #[error("Product not found: {0}")]
    ProductNotFound(String),
    #[error("Total amount mismatch. Calculated {calculated}, provided {provided}")]
    TotalMismatch { calculated: Rupees, provided: Rupees },
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for CheckoutError {
    fn from(e: sqlx::Error) -> Self {
        Self::DatabaseError(e.to_string())
    }
}

impl From<StoreApiError> for CheckoutError {
    fn from(e: StoreApiError) -> Self {
        match e {
            StoreApiError::DatabaseError(msg) => Self::DatabaseError(msg),
            StoreApiError::QueryError(msg) => Self::DatabaseError(msg),
            StoreApiError::NotFound(msg) => Self::DatabaseError(format!("Missing record: {msg}")),
        }
    }
}
