use crate::server::aggregate::summarize;
use crate::server::controller::error::CustomError;
use crate::server::model::order::{GroupOrder, GroupOrderStatus, LineItem, Submission};
use crate::server::state::AppState;
use crate::server::store::Store;
use crate::server::util::{id, time};
use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use log::info;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostGroupOrderRequest {
    pub id: Option<String>,
    pub restaurant_id: String,
    pub created_by: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PatchStatusRequest {
    pub status: GroupOrderStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostSubmissionRequest {
    pub id: Option<String>,
    pub user_name: String,
    pub items: Vec<LineItem>,
    pub created_at: Option<String>,
}

fn now_rfc3339() -> String {
    time::helper::get_utc_now().to_rfc3339()
}

#[get("/v1/group-orders")]
pub(crate) async fn get_group_orders(data: web::Data<AppState>) -> impl Responder {
    web::Json(data.get_store().group_orders().await)
}

#[get("/v1/group-orders/{id}")]
pub(crate) async fn get_group_order(
    id: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    match data.get_store().group_order(&id).await {
        Some(view) => Ok(web::Json(view)),
        None => Err(CustomError::ResourceNotFound),
    }
}

#[post("/v1/group-orders")]
/// Open a new round against a restaurant's current menu. Restaurant name and
/// menu id are snapshot here so the round survives later catalog edits.
pub(crate) async fn post_group_orders(
    body: web::Json<PostGroupOrderRequest>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    let body = body.into_inner();
    let restaurant = data
        .get_store()
        .restaurant(&body.restaurant_id)
        .await
        .ok_or(CustomError::ResourceNotFound)?;
    let menu = restaurant.menu.ok_or(CustomError::BadRequest)?;

    let order = GroupOrder {
        id: body.id.unwrap_or_else(|| id::generate("order")),
        restaurant_id: restaurant.restaurant.id,
        restaurant_name: restaurant.restaurant.name,
        menu_id: menu.id,
        status: GroupOrderStatus::Open,
        created_at: body.created_at.unwrap_or_else(now_rfc3339),
        created_by: body.created_by,
    };
    info!("group order {} opened by {}", order.id, order.created_by);
    data.get_store().insert_group_order(order.clone()).await;
    match data.get_store().group_order(&order.id).await {
        Some(view) => Ok(web::Json(view)),
        None => Err(CustomError::ResourceNotFound),
    }
}

#[patch("/v1/group-orders/{id}/status")]
/// Lock or reopen a round; both directions are always legal
pub(crate) async fn patch_group_order_status(
    id: web::Path<String>,
    body: web::Json<PatchStatusRequest>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    match data
        .get_store()
        .set_group_order_status(&id, body.status)
        .await
    {
        Some(view) => {
            info!("group order {} is now {}", view.order.id, view.order.status);
            Ok(web::Json(view))
        }
        None => Err(CustomError::ResourceNotFound),
    }
}

#[delete("/v1/group-orders/{id}")]
pub(crate) async fn delete_group_order(
    id: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    if data.get_store().delete_group_order(&id).await {
        Ok(HttpResponse::Ok())
    } else {
        Err(CustomError::ResourceNotFound)
    }
}

#[post("/v1/group-orders/{id}/submissions")]
/// One person's drink picks. Rejected with a reason while the round is locked.
pub(crate) async fn post_submission(
    id: web::Path<String>,
    body: web::Json<PostSubmissionRequest>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    let body = body.into_inner();
    if body.user_name.trim().is_empty() || body.items.is_empty() {
        return Err(CustomError::BadRequest);
    }
    let group_order_id = id.into_inner();
    let submission = Submission {
        id: body.id.unwrap_or_else(|| id::generate("sub")),
        group_order_id: group_order_id.clone(),
        user_name: body.user_name,
        items: body.items,
        created_at: body.created_at.unwrap_or_else(now_rfc3339),
    };
    info!(
        "submission {} by {} totals NT${}",
        submission.id,
        submission.user_name,
        submission.total()
    );
    let view = data
        .get_store()
        .create_submission(&group_order_id, submission)
        .await?;
    Ok(web::Json(view))
}

#[delete("/v1/submissions/{id}")]
/// Organizer removes one person's submission
pub(crate) async fn delete_submission(
    id: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    if data.get_store().delete_submission(&id).await {
        Ok(HttpResponse::Ok())
    } else {
        Err(CustomError::ResourceNotFound)
    }
}

#[get("/v1/group-orders/{id}/summary")]
/// Live aggregate, recomputed from the full submission set on every poll
pub(crate) async fn get_summary(
    id: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    match data.get_store().group_order(&id).await {
        Some(view) => Ok(web::Json(summarize(&view.order_items))),
        None => Err(CustomError::ResourceNotFound),
    }
}
