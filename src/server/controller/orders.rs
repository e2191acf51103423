use crate::server::controller::error::CustomError;
use crate::server::model::order::{Order, OrderId, PutOrderRequest};
use crate::server::state::AppState;
use crate::server::store::StoreError;
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use log::{info, warn};

#[get("/orders")]
/// list every order
pub(crate) async fn get_orders(data: web::Data<AppState>) -> impl Responder {
    web::Json(data.get_order_store().list_all().await)
}

#[get("/orders/{id}")]
/// get the first order with the given id
pub(crate) async fn get_order(id: web::Path<OrderId>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let id = id.into_inner();
    match data.get_order_store().find_by_id(id).await {
        Ok(order) => Ok(web::Json(order)),
        Err(e) => {
            warn!("get_order failed, {}", e);
            Err(e.into())
        }
    }
}

#[post("/orders")]
/// create an order, the caller supplies the id
pub(crate) async fn post_order(body: web::Json<Order>, data: web::Data<AppState>) -> impl Responder {
    let order = body.into_inner();
    info!("creating order id={}", order.id);
    data.get_order_store().insert(order).await;
    HttpResponse::Created().finish()
}

#[put("/orders/{id}")]
/// replace customer name and amount of an order
pub(crate) async fn put_order(
    id: web::Path<OrderId>,
    body: web::Json<PutOrderRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = id.into_inner();
    let PutOrderRequest { customer_name, amount } = body.into_inner();
    match data.get_order_store().update_by_id(id, customer_name, amount).await {
        Ok(()) => {
            info!("updated order id={}", id);
            HttpResponse::Ok().finish()
        }
        Err(StoreError::RecordNotFound(_)) => {
            warn!("put_order failed, no order with id={}", id);
            HttpResponse::NotFound().finish()
        }
    }
}

#[delete("/orders/{id}")]
/// remove all orders with the given id, succeeds whether or not any existed
pub(crate) async fn delete_order(id: web::Path<OrderId>, data: web::Data<AppState>) -> impl Responder {
    let id = id.into_inner();
    data.get_order_store().delete_by_id(id).await;
    HttpResponse::Ok().finish()
}
