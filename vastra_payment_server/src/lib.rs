//! # Vastra payment server
//! This module hosts the REST surface for the Vastra storefront's order and payment flows. It is responsible for:
//! Creating payment-gateway orders for checkout amounts.
//! Verifying gateway payment signatures.
//! Placing orders: reconciling carts against the catalog and persisting the result.
//! Order tracking queries and admin status updates.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/api/orders/...`: payment-order creation, signature verification, order placement, queries and status updates.
//! * `/api/cart/...`: cart line management for storefront users.
pub mod cart_routes;
pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
