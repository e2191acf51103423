//! main file for the server

pub mod model;
mod controller;
mod routes;
mod state;
mod store;

use actix_web::{middleware::{Logger, NormalizePath}, web, App, HttpServer};
use log::info;
use crate::server::model::config::ServerConfig;
use crate::server::state::AppState;
use crate::server::store::OrderStore;

/// Run the server
pub(crate) async fn run(ServerConfig{ addr, workers }: ServerConfig) -> std::io::Result<()> {
    // one store for the whole process, shared by every worker
    let state = web::Data::new(AppState::new(OrderStore::new()));
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::orders::configure)
    });
    if let Some(workers) = workers {
        server = server.workers(workers.get());
    }
    info!("listening on {}", addr);
    server
        .bind(addr)?
        .run()
        .await
}
