use log::debug;
use sqlx::SqliteConnection;

use crate::db_types::{CartItem, NewCartItem, Product};

/// Inserts a cart line with the product snapshot applied. A line for the same `(user, product, size, color)`
/// combination already in the cart absorbs the new quantity instead.
pub async fn upsert_cart_item(
    item: &NewCartItem,
    product: &Product,
    conn: &mut SqliteConnection,
) -> Result<CartItem, sqlx::Error> {
    let line: CartItem = sqlx::query_as(
        r#"
            INSERT INTO cart_items (user_id, product_id, product_name, unit_price, image_url, quantity, size, color)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (user_id, product_id, size, color) DO UPDATE SET
                quantity = cart_items.quantity + excluded.quantity,
                updated_at = CURRENT_TIMESTAMP
            RETURNING *;
        "#,
    )
    .bind(&item.user_id)
    .bind(&item.product_id)
    .bind(&product.name)
    .bind(product.price.value())
    .bind(&product.image_url)
    .bind(item.quantity)
    .bind(&item.size)
    .bind(&item.color)
    .fetch_one(conn)
    .await?;
    debug!("🛒️ Cart line [{}] saved for user {}", line.id, line.user_id);
    Ok(line)
}

/// All cart lines for the user, oldest first.
pub async fn fetch_cart_items(user_id: &str, conn: &mut SqliteConnection) -> Result<Vec<CartItem>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM cart_items WHERE user_id = $1 ORDER BY id").bind(user_id).fetch_all(conn).await
}

pub async fn update_quantity(
    cart_item_id: i64,
    quantity: i64,
    conn: &mut SqliteConnection,
) -> Result<Option<CartItem>, sqlx::Error> {
    sqlx::query_as("UPDATE cart_items SET quantity = $2, updated_at = CURRENT_TIMESTAMP WHERE id = $1 RETURNING *")
        .bind(cart_item_id)
        .bind(quantity)
        .fetch_optional(conn)
        .await
}

pub async fn remove_cart_item(cart_item_id: i64, conn: &mut SqliteConnection) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM cart_items WHERE id = $1").bind(cart_item_id).execute(conn).await?;
    Ok(result.rows_affected() > 0)
}

/// Deletes every cart line for the user, returning the number of lines removed.
pub async fn clear_cart(user_id: &str, conn: &mut SqliteConnection) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM cart_items WHERE user_id = $1").bind(user_id).execute(conn).await?;
    Ok(result.rows_affected())
}
