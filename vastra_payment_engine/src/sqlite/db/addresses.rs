use sqlx::SqliteConnection;

use crate::db_types::{Address, NewAddress};

/// Saves the user's shipping address. Each user keeps a single address row; saving again replaces the fields in
/// place.
pub async fn upsert_address(address: &NewAddress, conn: &mut SqliteConnection) -> Result<Address, sqlx::Error> {
    sqlx::query_as(
        r#"
            INSERT INTO addresses (user_id, street, city, state, postal_code, country)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id) DO UPDATE SET
                street = excluded.street,
                city = excluded.city,
                state = excluded.state,
                postal_code = excluded.postal_code,
                country = excluded.country,
                updated_at = CURRENT_TIMESTAMP
            RETURNING *;
        "#,
    )
    .bind(&address.user_id)
    .bind(&address.street)
    .bind(&address.city)
    .bind(&address.state)
    .bind(&address.postal_code)
    .bind(&address.country)
    .fetch_one(conn)
    .await
}

pub async fn fetch_address_for_user(user_id: &str, conn: &mut SqliteConnection) -> Result<Option<Address>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM addresses WHERE user_id = $1").bind(user_id).fetch_optional(conn).await
}

pub async fn fetch_address_by_id(address_id: i64, conn: &mut SqliteConnection) -> Result<Option<Address>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM addresses WHERE id = $1").bind(address_id).fetch_optional(conn).await
}
