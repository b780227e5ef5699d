use crate::{
    db_types::{Address, NewAddress},
    traits::StoreApiError,
};

/// Management of each user's stored shipping address. Users keep a single address; saving again updates it in
/// place.
#[allow(async_fn_in_trait)]
pub trait AddressManagement {
    async fn upsert_address(&self, address: &NewAddress) -> Result<Address, StoreApiError>;

    async fn fetch_address_for_user(&self, user_id: &str) -> Result<Option<Address>, StoreApiError>;

    async fn fetch_address_by_id(&self, address_id: i64) -> Result<Option<Address>, StoreApiError>;
}
