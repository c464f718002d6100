use std::sync::Arc;

use axum::{
    routing::{get, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::inventory::{InventoryService, SeaOrmInventoryRepository};

pub mod inventory;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<InventoryService<SeaOrmInventoryRepository>>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health plus the inventory resource.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route(
            "/inventory",
            get(inventory::list_inventory).post(inventory::create_inventory),
        )
        .route(
            "/inventory/:id",
            get(inventory::get_inventory)
                .put(inventory::update_inventory)
                .delete(inventory::delete_inventory),
        )
        .route("/inventory/:id/:action", put(inventory::inventory_action))
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
