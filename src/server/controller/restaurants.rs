use crate::server::classify::group_by_category;
use crate::server::controller::error::CustomError;
use crate::server::model::catalog::{Menu, MenuItem, Restaurant};
use crate::server::state::AppState;
use crate::server::store::Store;
use crate::server::util::{id, time};
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostRestaurantRequest {
    pub id: Option<String>,
    pub name: String,
    pub created_at: Option<String>,
    pub menu: Option<PostMenuRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostMenuRequest {
    pub id: Option<String>,
    pub items: Vec<NewMenuItem>,
    pub created_at: Option<String>,
}

/// Menu confirmation boundary: the subset of candidates (or hand-typed rows)
/// the organizer decided to keep.
#[derive(Debug, Deserialize)]
pub(crate) struct NewMenuItem {
    pub id: Option<String>,
    pub name: String,
    pub price: u32,
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetMenuResponse {
    #[serde(flatten)]
    pub menu: Menu,
    pub groups: Vec<MenuGroup>,
}

#[derive(Debug, Serialize)]
pub(crate) struct MenuGroup {
    pub category: String,
    pub items: Vec<MenuItem>,
}

fn now_rfc3339() -> String {
    time::helper::get_utc_now().to_rfc3339()
}

#[get("/v1/restaurants")]
pub(crate) async fn get_restaurants(data: web::Data<AppState>) -> impl Responder {
    web::Json(data.get_store().restaurants().await)
}

#[get("/v1/restaurants/{id}")]
pub(crate) async fn get_restaurant(
    id: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    match data.get_store().restaurant(&id).await {
        Some(view) => Ok(web::Json(view)),
        None => Err(CustomError::ResourceNotFound),
    }
}

#[post("/v1/restaurants")]
/// Register a restaurant, usually together with its confirmed menu
pub(crate) async fn post_restaurants(
    body: web::Json<PostRestaurantRequest>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    let body = body.into_inner();
    if body.name.trim().is_empty() {
        return Err(CustomError::BadRequest);
    }

    let restaurant = Restaurant {
        id: body.id.unwrap_or_else(|| id::generate("rest")),
        name: body.name,
        created_at: body.created_at.unwrap_or_else(now_rfc3339),
    };

    let menu = match body.menu {
        Some(menu) => Some(confirm_menu(menu, &restaurant.id)?),
        None => None,
    };

    info!(
        "registering restaurant id={} with menu={}",
        restaurant.id,
        menu.as_ref().map(|m| m.id.as_str()).unwrap_or("none")
    );
    data.get_store()
        .insert_restaurant(restaurant.clone(), menu)
        .await;
    match data.get_store().restaurant(&restaurant.id).await {
        Some(view) => Ok(web::Json(view)),
        None => Err(CustomError::ResourceNotFound),
    }
}

/// Promote confirmed rows to real menu items. Rejecting the whole request on
/// a bad row is deliberate: confirmation is explicit, not best-effort.
fn confirm_menu(menu: PostMenuRequest, restaurant_id: &str) -> Result<Menu, CustomError> {
    let mut items = Vec::with_capacity(menu.items.len());
    for item in menu.items {
        let name = item.name.trim();
        if name.is_empty() || name.chars().count() >= 50 || item.price == 0 {
            return Err(CustomError::BadRequest);
        }
        items.push(MenuItem {
            id: item.id.unwrap_or_else(|| id::generate("item")),
            name: name.to_string(),
            price: item.price,
            category: item.category,
        });
    }
    Ok(Menu {
        id: menu.id.unwrap_or_else(|| id::generate("menu")),
        restaurant_id: restaurant_id.to_string(),
        items,
        created_at: menu.created_at.unwrap_or_else(now_rfc3339),
    })
}

#[delete("/v1/restaurants/{id}")]
/// Remove a restaurant and everything hanging off it
pub(crate) async fn delete_restaurant(
    id: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    if data.get_store().delete_restaurant(&id).await {
        Ok(HttpResponse::Ok())
    } else {
        Err(CustomError::ResourceNotFound)
    }
}

#[get("/v1/menus/{id}")]
/// Menu with its items grouped for display
pub(crate) async fn get_menu(
    id: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    match data.get_store().menu(&id).await {
        Some(menu) => {
            let groups = group_by_category(&menu.items)
                .into_iter()
                .map(|(category, items)| MenuGroup { category, items })
                .collect();
            Ok(web::Json(GetMenuResponse { menu, groups }))
        }
        None => Err(CustomError::ResourceNotFound),
    }
}
