use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use models::inventory::{ListFilter, Model};
use service::inventory::InventoryInput;

use crate::errors::ApiError;
use crate::routes::AppState;

/// Optional equality filters for the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub name: Option<String>,
    pub category: Option<String>,
    pub available: Option<bool>,
}

pub async fn list_inventory(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<Model>>, ApiError> {
    let filter = ListFilter { name: q.name, category: q.category, available: q.available };
    Ok(Json(state.service.list(&filter).await?))
}

pub async fn create_inventory(
    State(state): State<AppState>,
    payload: Result<Json<InventoryInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = payload?;
    let rec = state.service.create(&input).await?;
    let location = format!("/inventory/{}", rec.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(rec)))
}

pub async fn get_inventory(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Model>, ApiError> {
    Ok(Json(state.service.read(id).await?))
}

pub async fn update_inventory(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<InventoryInput>, JsonRejection>,
) -> Result<Json<Model>, ApiError> {
    let Json(input) = payload?;
    Ok(Json(state.service.update(id, &input).await?))
}

/// 204 whether or not the id existed; repeated deletes never fail.
pub async fn delete_inventory(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn inventory_action(
    State(state): State<AppState>,
    Path((id, action)): Path<(i32, String)>,
) -> Result<Json<Model>, ApiError> {
    Ok(Json(state.service.action(id, &action).await?))
}
