//! # Database management and control.
//!
//! This module provides the interface contracts that payment engine database *backends* must implement.
//!
//! ## Checkout
//! The checkout flow reconciles a user's cart against the catalog and the claimed total, then persists an order and
//! clears the cart atomically. [`CheckoutDatabase`] defines that flow; it is the only trait with a real invariant
//! (the computed and claimed totals must agree to within a paisa) and a failure-sensitive side effect (payment
//! captured but no order recorded).
//!
//! ## Traits
//! * [`CheckoutDatabase`] defines the highest level of behaviour for backends supporting the payment engine.
//! * [`CartManagement`] manages pending cart lines.
//! * [`CatalogManagement`] reads (and for seeding, writes) the product catalog.
//! * [`AddressManagement`] manages each user's stored shipping address.
//! * [`OrderManagement`] provides queries over placed orders and status updates.
mod address_management;
mod cart_management;
mod catalog_management;
mod checkout_database;
mod order_management;

use thiserror::Error;

pub use address_management::AddressManagement;
pub use cart_management::CartManagement;
pub use catalog_management::CatalogManagement;
pub use checkout_database::{CheckoutDatabase, CheckoutError, TOTAL_TOLERANCE_PAISE};
pub use order_management::OrderManagement;

/// The error type for the bookkeeping traits (cart, catalog, address and order queries). Checkout has its own,
/// richer taxonomy in [`CheckoutError`].
#[derive(Debug, Clone, Error)]
pub enum StoreApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("User error constructing query: {0}")]
    QueryError(String),
    #[error("The record was not found: {0}")]
    NotFound(String),
}

impl From<sqlx::Error> for StoreApiError {
    fn from(e: sqlx::Error) -> Self {
        Self::DatabaseError(e.to_string())
    }
}
