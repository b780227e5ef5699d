//! The payment engine public API.
//!
//! Each API struct is a thin, backend-generic wrapper over the [`crate::traits`] contracts. The server crate
//! instantiates them over [`crate::SqliteDatabase`]; tests instantiate them over mocks.
mod address_api;
mod cart_api;
mod checkout_api;
mod order_api;

pub use address_api::AddressApi;
pub use cart_api::CartApi;
pub use checkout_api::CheckoutApi;
pub use order_api::OrderApi;
