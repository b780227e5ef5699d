//! Razorpay integration tools.
//!
//! A thin wrapper around the two Razorpay operations the storefront needs:
//! * creating a gateway order for an amount ([`RazorpayApi::create_order`]), and
//! * verifying the payment signature Razorpay's checkout hands back to the client
//!   ([`PaymentSignature`]).
//!
//! The adapter performs no retries. A gateway failure surfaces immediately as a
//! [`RazorpayApiError`] and retry policy is left to the caller.
mod api;
mod config;
mod data_objects;
mod error;
mod signature;

pub use api::{new_receipt_id, RazorpayApi};
pub use config::RazorpayConfig;
pub use data_objects::{NewRazorpayOrder, RazorpayOrder};
pub use error::RazorpayApiError;
pub use signature::{calculate_signature, PaymentSignature};
