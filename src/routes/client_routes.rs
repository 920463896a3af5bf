use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use crate::controllers::client_controller::ClientController;
use crate::models::client::{Client, CreateClientRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_client_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_clients).post(add_client))
        .route("/:id", delete(remove_client))
}

async fn list_clients(State(state): State<AppState>) -> Result<Json<Vec<Client>>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn add_client(
    State(state): State<AppState>,
    Json(request): Json<CreateClientRequest>,
) -> Result<Json<Client>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn remove_client(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let controller = ClientController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
