use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};
use log::info;
use razorpay_tools::RazorpayApi;
use vastra_payment_engine::{
    events::{EventHandlers, EventHooks, EventProducers},
    AddressApi,
    CartApi,
    CheckoutApi,
    OrderApi,
    SqliteDatabase,
};

use crate::{
    cart_routes::{AddToCartRoute, CartForUserRoute, ClearCartRoute, RemoveCartItemRoute, UpdateCartItemRoute},
    config::ServerConfig,
    errors::ServerError,
    routes::{
        create_payment_order,
        health,
        verify_payment,
        AddressForUserRoute,
        AllOrdersRoute,
        OrderByIdRoute,
        OrdersForUserRoute,
        PlaceOrderRoute,
        SaveAddressRoute,
        UpdateOrderStatusRoute,
    },
};

const EVENT_BUFFER_SIZE: usize = 100;

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let handlers = EventHandlers::new(EVENT_BUFFER_SIZE, EventHooks::default());
    let producers = handlers.producers();
    handlers.start_handlers().await;
    let srv = create_server_instance(config, db, producers)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(
    config: ServerConfig,
    db: SqliteDatabase,
    producers: EventProducers,
) -> Result<Server, ServerError> {
    let host = config.host.clone();
    let port = config.port;
    let razorpay_api = RazorpayApi::new(config.razorpay.clone()).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    info!("💻️ Database URL: {}", config.database_url);
    let srv = HttpServer::new(move || {
        let checkout_api = CheckoutApi::new(db.clone(), producers.clone());
        let order_api = OrderApi::new(db.clone());
        let cart_api = CartApi::new(db.clone());
        let address_api = AddressApi::new(db.clone());
        let app = App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("vps::access_log"))
            .app_data(web::Data::new(checkout_api))
            .app_data(web::Data::new(order_api))
            .app_data(web::Data::new(cart_api))
            .app_data(web::Data::new(address_api))
            .app_data(web::Data::new(razorpay_api.clone()))
            .app_data(web::Data::new(config.razorpay.clone()))
            .service(health);
        // Fixed paths must register before the `{id}` catch-alls so they are matched first.
        let api_scope = web::scope("/api")
            .route("/orders/create-payment-order", web::post().to(create_payment_order))
            .route("/orders/verify-payment", web::post().to(verify_payment))
            .service(PlaceOrderRoute::<SqliteDatabase>::new())
            .service(SaveAddressRoute::<SqliteDatabase>::new())
            .service(AddressForUserRoute::<SqliteDatabase>::new())
            .service(OrdersForUserRoute::<SqliteDatabase>::new())
            .service(UpdateOrderStatusRoute::<SqliteDatabase>::new())
            .service(AllOrdersRoute::<SqliteDatabase>::new())
            .service(OrderByIdRoute::<SqliteDatabase>::new())
            .service(AddToCartRoute::<SqliteDatabase>::new())
            .service(CartForUserRoute::<SqliteDatabase>::new())
            .service(UpdateCartItemRoute::<SqliteDatabase>::new())
            .service(RemoveCartItemRoute::<SqliteDatabase>::new())
            .service(ClearCartRoute::<SqliteDatabase>::new());
        app.service(api_scope)
    })
    .bind((host, port))?
    .run();
    Ok(srv)
}
