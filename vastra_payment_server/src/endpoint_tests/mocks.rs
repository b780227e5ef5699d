use mockall::mock;
use vastra_payment_engine::{
    db_types::{
        Address,
        CartItem,
        CheckoutRequest,
        FullOrder,
        NewAddress,
        NewCartItem,
        NewProduct,
        OrderStatus,
        Product,
        ProductRef,
    },
    traits::{
        AddressManagement,
        CartManagement,
        CatalogManagement,
        CheckoutDatabase,
        CheckoutError,
        OrderManagement,
        StoreApiError,
    },
};

mock! {
    pub CheckoutManager {}
    impl OrderManagement for CheckoutManager {
        async fn fetch_order_by_id(&self, order_id: i64) -> Result<Option<FullOrder>, StoreApiError>;
        async fn fetch_orders_for_user(&self, user_id: &str) -> Result<Vec<FullOrder>, StoreApiError>;
        async fn fetch_all_orders(&self) -> Result<Vec<FullOrder>, StoreApiError>;
        async fn update_order_status(&self, order_id: i64, status: OrderStatus) -> Result<FullOrder, StoreApiError>;
    }
    impl CheckoutDatabase for CheckoutManager {
        fn url(&self) -> &str;
        async fn checkout(&self, request: CheckoutRequest) -> Result<(FullOrder, bool), CheckoutError>;
    }
}

mock! {
    pub OrderManager {}
    impl OrderManagement for OrderManager {
        async fn fetch_order_by_id(&self, order_id: i64) -> Result<Option<FullOrder>, StoreApiError>;
        async fn fetch_orders_for_user(&self, user_id: &str) -> Result<Vec<FullOrder>, StoreApiError>;
        async fn fetch_all_orders(&self) -> Result<Vec<FullOrder>, StoreApiError>;
        async fn update_order_status(&self, order_id: i64, status: OrderStatus) -> Result<FullOrder, StoreApiError>;
    }
}

mock! {
    pub CartManager {}
    impl CartManagement for CartManager {
        async fn upsert_cart_item(&self, item: &NewCartItem, product: &Product) -> Result<CartItem, StoreApiError>;
        async fn fetch_cart_items(&self, user_id: &str) -> Result<Vec<CartItem>, StoreApiError>;
        async fn update_cart_quantity(&self, cart_item_id: i64, quantity: i64) -> Result<CartItem, StoreApiError>;
        async fn remove_cart_item(&self, cart_item_id: i64) -> Result<bool, StoreApiError>;
        async fn clear_cart(&self, user_id: &str) -> Result<u64, StoreApiError>;
    }
    impl CatalogManagement for CartManager {
        async fn upsert_product(&self, product: &NewProduct) -> Result<Product, StoreApiError>;
        async fn fetch_product(&self, product_ref: &ProductRef) -> Result<Option<Product>, StoreApiError>;
    }
}

mock! {
    pub AddressManager {}
    impl AddressManagement for AddressManager {
        async fn upsert_address(&self, address: &NewAddress) -> Result<Address, StoreApiError>;
        async fn fetch_address_for_user(&self, user_id: &str) -> Result<Option<Address>, StoreApiError>;
        async fn fetch_address_by_id(&self, address_id: i64) -> Result<Option<Address>, StoreApiError>;
    }
}
