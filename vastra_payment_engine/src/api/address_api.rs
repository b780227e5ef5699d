use crate::{
    db_types::{Address, NewAddress},
    traits::{AddressManagement, StoreApiError},
};

/// `AddressApi` manages the single stored shipping address per user.
#[derive(Debug)]
pub struct AddressApi<B> {
    db: B,
}

impl<B> AddressApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> AddressApi<B>
where B: AddressManagement
{
    /// Saves the user's address, replacing any previously stored one.
    pub async fn save_address(&self, address: NewAddress) -> Result<Address, StoreApiError> {
        self.db.upsert_address(&address).await
    }

    pub async fn address_for_user(&self, user_id: &str) -> Result<Option<Address>, StoreApiError> {
        self.db.fetch_address_for_user(user_id).await
    }
}
