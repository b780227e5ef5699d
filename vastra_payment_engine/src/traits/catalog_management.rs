use crate::{
    db_types::{NewProduct, Product, ProductRef},
    traits::StoreApiError,
};

/// Read access to the product catalog, plus the upsert used by seeding and tests.
///
/// Checkout correctness depends on always reading *current* catalog state, so implementations must not cache
/// product rows across calls.
#[allow(async_fn_in_trait)]
pub trait CatalogManagement {
    /// Inserts the product, or updates the existing row with the same SKU.
    async fn upsert_product(&self, product: &NewProduct) -> Result<Product, StoreApiError>;

    /// Resolves a polymorphic product reference. A [`ProductRef::CatalogId`] also matches a numeric SKU, so a
    /// single lookup covers both identifier schemes.
    async fn fetch_product(&self, product_ref: &ProductRef) -> Result<Option<Product>, StoreApiError>;
}
