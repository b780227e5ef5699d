//! `SqliteDatabase` is a concrete implementation of a Vastra payment engine backend.
//!
//! Unsurprisingly, it uses SQLite as the backend and implements all the traits defined in the [`crate::traits`]
//! module.
use std::fmt::Debug;

use log::*;
use sqlx::SqlitePool;

use super::db::{addresses, cart, new_pool, orders, products};
use crate::{
    db_types::{
        Address,
        CartItem,
        CheckoutRequest,
        FullOrder,
        NewAddress,
        NewCartItem,
        NewOrder,
        NewOrderItem,
        NewProduct,
        OrderStatus,
        Product,
        ProductRef,
        Rupees,
        ShippingAddress,
    },
    traits::{
        AddressManagement,
        CartManagement,
        CatalogManagement,
        CheckoutDatabase,
        CheckoutError,
        OrderManagement,
        StoreApiError,
        TOTAL_TOLERANCE_PAISE,
    },
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl SqliteDatabase {
    /// Creates a new connection pool with the given maximum number of connections and returns the database handle.
    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = new_pool(url, max_connections).await?;
        Ok(Self { url: url.to_string(), pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl CartManagement for SqliteDatabase {
    async fn upsert_cart_item(&self, item: &NewCartItem, product: &Product) -> Result<CartItem, StoreApiError> {
        let mut conn = self.pool.acquire().await?;
        let line = cart::upsert_cart_item(item, product, &mut conn).await?;
        Ok(line)
    }

    async fn fetch_cart_items(&self, user_id: &str) -> Result<Vec<CartItem>, StoreApiError> {
        let mut conn = self.pool.acquire().await?;
        let lines = cart::fetch_cart_items(user_id, &mut conn).await?;
        Ok(lines)
    }

    async fn update_cart_quantity(&self, cart_item_id: i64, quantity: i64) -> Result<CartItem, StoreApiError> {
        let mut conn = self.pool.acquire().await?;
        cart::update_quantity(cart_item_id, quantity, &mut conn)
            .await?
            .ok_or_else(|| StoreApiError::NotFound(format!("cart item {cart_item_id}")))
    }

    async fn remove_cart_item(&self, cart_item_id: i64) -> Result<bool, StoreApiError> {
        let mut conn = self.pool.acquire().await?;
        let removed = cart::remove_cart_item(cart_item_id, &mut conn).await?;
        Ok(removed)
    }

    async fn clear_cart(&self, user_id: &str) -> Result<u64, StoreApiError> {
        let mut conn = self.pool.acquire().await?;
        let n = cart::clear_cart(user_id, &mut conn).await?;
        Ok(n)
    }
}

impl CatalogManagement for SqliteDatabase {
    async fn upsert_product(&self, product: &NewProduct) -> Result<Product, StoreApiError> {
        let mut conn = self.pool.acquire().await?;
        let product = products::upsert_product(product, &mut conn).await?;
        Ok(product)
    }

    async fn fetch_product(&self, product_ref: &ProductRef) -> Result<Option<Product>, StoreApiError> {
        let mut conn = self.pool.acquire().await?;
        let product = products::fetch_product(product_ref, &mut conn).await?;
        Ok(product)
    }
}

impl AddressManagement for SqliteDatabase {
    async fn upsert_address(&self, address: &NewAddress) -> Result<Address, StoreApiError> {
        let mut conn = self.pool.acquire().await?;
        let address = addresses::upsert_address(address, &mut conn).await?;
        Ok(address)
    }

    async fn fetch_address_for_user(&self, user_id: &str) -> Result<Option<Address>, StoreApiError> {
        let mut conn = self.pool.acquire().await?;
        let address = addresses::fetch_address_for_user(user_id, &mut conn).await?;
        Ok(address)
    }

    async fn fetch_address_by_id(&self, address_id: i64) -> Result<Option<Address>, StoreApiError> {
        let mut conn = self.pool.acquire().await?;
        let address = addresses::fetch_address_by_id(address_id, &mut conn).await?;
        Ok(address)
    }
}

impl OrderManagement for SqliteDatabase {
    async fn fetch_order_by_id(&self, order_id: i64) -> Result<Option<FullOrder>, StoreApiError> {
        let mut conn = self.pool.acquire().await?;
        let order = match orders::fetch_order_by_id(order_id, &mut conn).await? {
            Some(order) => order,
            None => return Ok(None),
        };
        let items = orders::fetch_order_items(order.id, &mut conn).await?;
        Ok(Some(FullOrder { order, items }))
    }

    async fn fetch_orders_for_user(&self, user_id: &str) -> Result<Vec<FullOrder>, StoreApiError> {
        let mut conn = self.pool.acquire().await?;
        let rows = orders::fetch_orders_for_user(user_id, &mut conn).await?;
        let mut result = Vec::with_capacity(rows.len());
        for order in rows {
            let items = orders::fetch_order_items(order.id, &mut conn).await?;
            result.push(FullOrder { order, items });
        }
        Ok(result)
    }

    async fn fetch_all_orders(&self) -> Result<Vec<FullOrder>, StoreApiError> {
        let mut conn = self.pool.acquire().await?;
        let rows = orders::fetch_all_orders(&mut conn).await?;
        let mut result = Vec::with_capacity(rows.len());
        for order in rows {
            let items = orders::fetch_order_items(order.id, &mut conn).await?;
            result.push(FullOrder { order, items });
        }
        Ok(result)
    }

    async fn update_order_status(&self, order_id: i64, status: OrderStatus) -> Result<FullOrder, StoreApiError> {
        let mut conn = self.pool.acquire().await?;
        let order = orders::update_status(order_id, status, &mut conn)
            .await?
            .ok_or_else(|| StoreApiError::NotFound(format!("order {order_id}")))?;
        let items = orders::fetch_order_items(order.id, &mut conn).await?;
        Ok(FullOrder { order, items })
    }
}

impl CheckoutDatabase for SqliteDatabase {
    fn url(&self) -> &str {
        self.url.as_str()
    }

    async fn checkout(&self, request: CheckoutRequest) -> Result<(FullOrder, bool), CheckoutError> {
        let mut tx = self.pool.begin().await?;
        // Idempotency check first: a replayed checkout for an already-recorded payment returns the existing order.
        // A second checkout racing past this check loses on the unique payment id index at insert time.
        if let Some(order) = orders::fetch_order_by_payment_id(&request.razorpay_payment_id, &mut tx).await? {
            let items = orders::fetch_order_items(order.id, &mut tx).await?;
            debug!(
                "🧾️ Payment [{}] already has order [{}]. Skipping checkout.",
                request.razorpay_payment_id, order.order_number
            );
            return Ok((FullOrder { order, items }, false));
        }
        let cart_lines = cart::fetch_cart_items(&request.user_id, &mut tx).await?;
        if cart_lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let address = addresses::fetch_address_by_id(request.shipping_address_id, &mut tx)
            .await?
            .ok_or(CheckoutError::AddressNotFound(request.shipping_address_id))?;
        let mut items = Vec::with_capacity(cart_lines.len());
        for line in &cart_lines {
            let product_ref = ProductRef::parse(&line.product_id);
            let product = products::fetch_product(&product_ref, &mut tx)
                .await?
                .ok_or_else(|| CheckoutError::ProductNotFound(line.product_id.clone()))?;
            items.push(NewOrderItem::from_cart_line(line, &product));
        }
        let calculated: Rupees = items.iter().map(|i| i.line_total).sum();
        trace!(
            "🧾️ Calculated total for user {} is {calculated} over {} lines. Claimed: {}",
            request.user_id,
            items.len(),
            request.claimed_total
        );
        if calculated.difference(request.claimed_total) > TOTAL_TOLERANCE_PAISE {
            warn!(
                "🧾️ Total mismatch for user {}. Calculated {calculated}, claimed {}. Rejecting checkout.",
                request.user_id, request.claimed_total
            );
            return Err(CheckoutError::TotalMismatch { calculated, provided: request.claimed_total });
        }
        let new_order = NewOrder {
            user_id: request.user_id.clone(),
            total_amount: calculated,
            shipping_address: ShippingAddress::from(&address),
            payment_method: request.payment_method.clone(),
            razorpay_order_id: request.razorpay_order_id.clone(),
            razorpay_payment_id: request.razorpay_payment_id.clone(),
        };
        let order = orders::insert_order(new_order, &mut tx).await?;
        let items = orders::insert_order_items(order.id, &items, &mut tx).await?;
        let cleared = cart::clear_cart(&request.user_id, &mut tx).await?;
        tx.commit().await?;
        debug!(
            "🧾️ Order [{}] persisted for user {} and {cleared} cart lines cleared",
            order.order_number, request.user_id
        );
        Ok((FullOrder { order, items }, true))
    }
}
