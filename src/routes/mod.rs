pub mod client_routes;
pub mod rental_routes;
pub mod vehicle_routes;

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Router completo de la aplicación, con los middlewares aplicados
pub fn create_api_router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/clients", client_routes::create_client_router())
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/rentals", rental_routes::create_rental_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Car Rental API funcionando correctamente",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Handler de pánicos a nivel request: se loguea el detalle y el caller
/// recibe un 500 opaco, igual que cualquier otro error inesperado.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    error!("Panic while handling request: {}", detail);

    (StatusCode::INTERNAL_SERVER_ERROR, "An error occurred").into_response()
}
