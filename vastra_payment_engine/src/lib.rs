//! Vastra Payment Engine
//!
//! The payment engine turns a user's shopping cart into durable, price-verified order records for the Vastra
//! storefront. This library contains the core logic and is gateway-agnostic: signature verification and gateway
//! order creation live in the `razorpay_tools` crate, and the HTTP surface lives in `vastra_payment_server`.
//!
//! The library is divided into two main sections:
//! 1. Database management and control ([`mod@sqlite`]). SQLite is the supported backend. You should never need to
//!    access the database directly. Instead, use the public API provided by the payment engine. The exception is the
//!    data types used in the database. These are defined in the `db_types` module and are public.
//! 2. The payment engine public API ([`mod@api`]). This provides the public-facing functionality of the engine:
//!    cart management, address management, order queries, and the checkout flow itself. Specific backends need to
//!    implement the traits in the [`mod@traits`] module in order to act as a backend for the payment server.
//!
//! The engine also provides a set of events that can be subscribed to. These events are emitted when certain actions
//! occur within the engine, for example when an order is placed, an `OrderPlacedEvent` is emitted. A simple actor
//! framework is used so that you can easily hook into these events and perform custom actions.
mod api;

pub mod db_types;
pub mod events;
#[cfg(feature = "sqlite")]
mod sqlite;
pub mod traits;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

pub use api::{AddressApi, CartApi, CheckoutApi, OrderApi};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDatabase;
