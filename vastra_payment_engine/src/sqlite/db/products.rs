use sqlx::SqliteConnection;

use crate::db_types::{NewProduct, Product, ProductRef};

/// Inserts a new catalog product, or updates the existing row carrying the same SKU.
pub async fn upsert_product(product: &NewProduct, conn: &mut SqliteConnection) -> Result<Product, sqlx::Error> {
    let product = sqlx::query_as(
        r#"
            INSERT INTO products (sku, name, description, price, image_url, in_stock)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (sku) DO UPDATE SET
                name = excluded.name,
                description = excluded.description,
                price = excluded.price,
                image_url = excluded.image_url,
                in_stock = excluded.in_stock,
                updated_at = CURRENT_TIMESTAMP
            RETURNING *;
        "#,
    )
    .bind(&product.sku)
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price.value())
    .bind(&product.image_url)
    .bind(product.in_stock)
    .fetch_one(conn)
    .await?;
    Ok(product)
}

/// Resolves a product reference against the catalog.
///
/// Cart lines may carry either the catalog row id or the human-assigned SKU, so a numeric reference matches on
/// either column in a single query. If a numeric SKU collides with a row id, the row id wins.
pub async fn fetch_product(
    product_ref: &ProductRef,
    conn: &mut SqliteConnection,
) -> Result<Option<Product>, sqlx::Error> {
    let product = match product_ref {
        ProductRef::CatalogId(id) => {
            sqlx::query_as("SELECT * FROM products WHERE id = $1 OR sku = $2 ORDER BY (id = $1) DESC LIMIT 1")
                .bind(id)
                .bind(id.to_string())
                .fetch_optional(conn)
                .await?
        },
        ProductRef::Sku(sku) => {
            sqlx::query_as("SELECT * FROM products WHERE sku = $1").bind(sku).fetch_optional(conn).await?
        },
    };
    Ok(product)
}
