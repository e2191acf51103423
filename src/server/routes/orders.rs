use actix_web::web;
use log::warn;
use crate::server::controller::error::CustomError;
use crate::server::controller::orders::{delete_order, get_order, get_orders, post_order, put_order};

/// Mount the orders resource
pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        warn!("failed to parse order payload, {}", err);
        CustomError::BadRequest.into()
    }))
    .service(get_orders)
    .service(get_order)
    .service(post_order)
    .service(put_order)
    .service(delete_order);
}
