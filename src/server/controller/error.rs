use crate::server::model::order::SubmitError;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{error, HttpResponse};
use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
pub(crate) enum CustomError {
    #[display("invalid request")]
    BadRequest,
    #[display("resource not found")]
    ResourceNotFound,
    #[display("order is locked")]
    OrderLocked,
}

impl From<SubmitError> for CustomError {
    fn from(e: SubmitError) -> Self {
        match e {
            SubmitError::Locked => CustomError::OrderLocked,
            SubmitError::NotFound => CustomError::ResourceNotFound,
            SubmitError::BadQuantity => CustomError::BadRequest,
        }
    }
}

impl error::ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::BadRequest | CustomError::OrderLocked => StatusCode::BAD_REQUEST,
            CustomError::ResourceNotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(serde_json::json!({ "error": self.to_string() }).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::error::ResponseError;

    #[test]
    fn submit_errors_map_to_http_statuses() {
        assert_eq!(
            CustomError::from(SubmitError::Locked).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CustomError::from(SubmitError::NotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CustomError::from(SubmitError::BadQuantity).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn locked_rejection_carries_a_reason() {
        assert_eq!(CustomError::OrderLocked.to_string(), "order is locked");
    }
}
