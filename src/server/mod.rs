//! main file for the server

pub(crate) mod aggregate;
pub(crate) mod classify;
pub(crate) mod controller;
pub(crate) mod model;
pub(crate) mod recognition;
pub(crate) mod state;
pub(crate) mod store;
pub(crate) mod util;

use crate::server::controller::group_orders::{
    delete_group_order, delete_submission, get_group_order, get_group_orders, get_summary,
    patch_group_order_status, post_group_orders, post_submission,
};
use crate::server::controller::recognition::post_recognition;
use crate::server::controller::restaurants::{
    delete_restaurant, get_menu, get_restaurant, get_restaurants, post_restaurants,
};
use crate::server::model::config::ServerConfig;
use crate::server::recognition::fallback::FallbackCoordinator;
use crate::server::state::AppState;
use crate::server::store::memory::MemStore;
use actix_web::{middleware::Logger, web, App, HttpServer};

/// menu photos arrive base64-encoded in the request body
const JSON_BODY_LIMIT: usize = 50 * 1024 * 1024;

/// Run the server
pub async fn run(ServerConfig { addr, recognition }: ServerConfig) -> std::io::Result<()> {
    let coordinator = FallbackCoordinator::new(recognition.providers());
    let state = web::Data::new(AppState::new(MemStore::default(), coordinator));

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .app_data(web::JsonConfig::default().limit(JSON_BODY_LIMIT))
            .service(get_restaurants)
            .service(get_restaurant)
            .service(post_restaurants)
            .service(delete_restaurant)
            .service(get_menu)
            .service(get_group_orders)
            .service(get_group_order)
            .service(post_group_orders)
            .service(patch_group_order_status)
            .service(delete_group_order)
            .service(post_submission)
            .service(delete_submission)
            .service(get_summary)
            .service(post_recognition)
    })
    .bind(addr)?
    .run()
    .await
}
