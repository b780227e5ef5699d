use log::debug;
use sqlx::SqliteConnection;

use crate::db_types::{NewOrder, NewOrderItem, Order, OrderItem, OrderStatus, PaymentStatus};

/// Returns the order recorded against the given gateway payment id, if any. This is the checkout idempotency
/// lookup: one payment, one order.
pub async fn fetch_order_by_payment_id(
    payment_id: &str,
    conn: &mut SqliteConnection,
) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM orders WHERE razorpay_payment_id = $1")
        .bind(payment_id)
        .fetch_optional(conn)
        .await
}

/// Inserts a new order row. Not atomic on its own; checkout embeds this call inside a transaction together with
/// the item inserts and the cart clear.
///
/// The display order number is derived from the current order count (`ORD-100000` onwards), the scheme the
/// storefront has used since launch. The unique index on `order_number` backs it up.
pub async fn insert_order(order: NewOrder, conn: &mut SqliteConnection) -> Result<Order, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders").fetch_one(&mut *conn).await?;
    let order_number = format!("ORD-{}", 100_000 + count);
    let order: Order = sqlx::query_as(
        r#"
            INSERT INTO orders (
                order_number,
                user_id,
                total_amount,
                street,
                city,
                state,
                postal_code,
                country,
                status,
                payment_method,
                payment_status,
                razorpay_order_id,
                razorpay_payment_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *;
        "#,
    )
    .bind(&order_number)
    .bind(&order.user_id)
    .bind(order.total_amount.value())
    .bind(&order.shipping_address.street)
    .bind(&order.shipping_address.city)
    .bind(&order.shipping_address.state)
    .bind(&order.shipping_address.postal_code)
    .bind(&order.shipping_address.country)
    .bind(OrderStatus::Pending)
    .bind(&order.payment_method)
    .bind(PaymentStatus::Paid)
    .bind(&order.razorpay_order_id)
    .bind(&order.razorpay_payment_id)
    .fetch_one(conn)
    .await?;
    debug!("📦️ Order [{}] inserted with id {}", order.order_number, order.id);
    Ok(order)
}

pub async fn insert_order_items(
    order_id: i64,
    items: &[NewOrderItem],
    conn: &mut SqliteConnection,
) -> Result<Vec<OrderItem>, sqlx::Error> {
    let mut result = Vec::with_capacity(items.len());
    for item in items {
        let row = sqlx::query_as(
            r#"
                INSERT INTO order_items (order_id, product_id, product_name, quantity, unit_price, line_total, size, color)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING *;
            "#,
        )
        .bind(order_id)
        .bind(&item.product_id)
        .bind(&item.product_name)
        .bind(item.quantity)
        .bind(item.unit_price.value())
        .bind(item.line_total.value())
        .bind(&item.size)
        .bind(&item.color)
        .fetch_one(&mut *conn)
        .await?;
        result.push(row);
    }
    Ok(result)
}

pub async fn fetch_order_items(order_id: i64, conn: &mut SqliteConnection) -> Result<Vec<OrderItem>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM order_items WHERE order_id = $1 ORDER BY id").bind(order_id).fetch_all(conn).await
}

pub async fn fetch_order_by_id(order_id: i64, conn: &mut SqliteConnection) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM orders WHERE id = $1").bind(order_id).fetch_optional(conn).await
}

/// Orders for the user, newest first.
pub async fn fetch_orders_for_user(user_id: &str, conn: &mut SqliteConnection) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM orders WHERE user_id = $1 ORDER BY order_date DESC, id DESC")
        .bind(user_id)
        .fetch_all(conn)
        .await
}

pub async fn fetch_all_orders(conn: &mut SqliteConnection) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM orders ORDER BY order_date DESC, id DESC").fetch_all(conn).await
}

pub async fn update_status(
    order_id: i64,
    status: OrderStatus,
    conn: &mut SqliteConnection,
) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as("UPDATE orders SET status = $2, updated_at = CURRENT_TIMESTAMP WHERE id = $1 RETURNING *")
        .bind(order_id)
        .bind(status)
        .fetch_optional(conn)
        .await
}
