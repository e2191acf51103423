use actix_web::{error, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use derive_more::{Display, Error};
use crate::server::model::order::OrderId;
use crate::server::store::StoreError;

#[derive(Debug, Display, Error)]
pub(crate) enum CustomError {
    #[display("Order not found with id: {_0}")]
    OrderNotFound(#[error(not(source))] OrderId),
    #[display("invalid request")]
    BadRequest,
}

impl From<StoreError> for CustomError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::RecordNotFound(id) => CustomError::OrderNotFound(id),
        }
    }
}

impl error::ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::OrderNotFound(_) => StatusCode::NOT_FOUND,
            CustomError::BadRequest => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}
