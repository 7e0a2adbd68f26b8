use crate::server::controller::error::CustomError;
use crate::server::model::catalog::Candidate;
use crate::server::state::AppState;
use actix_web::{post, web, Responder};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostRecognitionRequest {
    /// base64-encoded photo of the menu
    pub image: String,
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
}

fn default_mime_type() -> String {
    "image/jpeg".to_string()
}

#[derive(Debug, Serialize)]
pub(crate) struct PostRecognitionResponse {
    pub items: Vec<Candidate>,
}

#[post("/v1/recognitions")]
/// Digitize a menu photo. Suggestions only; nothing is persisted until the
/// organizer confirms a subset through the restaurants endpoint.
pub(crate) async fn post_recognition(
    body: web::Json<PostRecognitionRequest>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    let body = body.into_inner();
    let image = STANDARD
        .decode(body.image.as_bytes())
        .map_err(|_| CustomError::BadRequest)?;

    let items = data.get_recognizer().suggest(&image, &body.mime_type).await;
    info!("recognition produced {} candidate items", items.len());
    Ok(web::Json(PostRecognitionResponse { items }))
}
