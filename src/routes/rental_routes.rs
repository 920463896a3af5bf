use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};

use crate::controllers::rental_controller::RentalController;
use crate::models::rental::{CreateRentalRequest, Rental, RentalResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_rental_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_rentals).post(create_rental))
        .route("/:id", delete(cancel_rental))
}

async fn list_rentals(
    State(state): State<AppState>,
) -> Result<Json<Vec<RentalResponse>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn create_rental(
    State(state): State<AppState>,
    Json(request): Json<CreateRentalRequest>,
) -> Result<Json<RentalResponse>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

// DELETE cancela (soft-cancel) y devuelve el rental actualizado con 200
async fn cancel_rental(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Rental>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    Ok(Json(controller.cancel(id).await?))
}
