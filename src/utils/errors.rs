//! Sistema de manejo de errores
//!
//! Este módulo define los errores del dominio de alquileres y su
//! conversión a respuestas HTTP. El texto de los mensajes 400/404 es
//! parte del contrato de la API: los clientes (y los tests) comparan
//! el string exacto.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid date range")]
    InvalidDateRange,

    #[error("Client does not exists")]
    ClientNotFound,

    /// Cubre tanto "vehículo inexistente" como "vehículo con reserva
    /// solapada": hacia afuera son la misma señal.
    #[error("Vehicle is not available")]
    VehicleUnavailable,

    #[error("Rental is already cancelled")]
    AlreadyCancelled,

    #[error("{0} has a pending rental")]
    HasPendingRental(&'static str),

    #[error("Daily price must be greater than 0")]
    InvalidDailyPrice,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("An error occurred")]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Internal(e.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(entity) => {
                warn!("{} not found", entity);
                StatusCode::NOT_FOUND.into_response()
            }

            AppError::Internal(e) => {
                // Se loguea el detalle completo; el caller solo ve un 500 opaco
                error!("Internal error: {:#}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "An error occurred").into_response()
            }

            rejected => {
                warn!("Request rejected: {}", rejected);
                (StatusCode::BAD_REQUEST, rejected.to_string()).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_messages() {
        assert_eq!(AppError::InvalidDateRange.to_string(), "Invalid date range");
        assert_eq!(AppError::ClientNotFound.to_string(), "Client does not exists");
        assert_eq!(AppError::VehicleUnavailable.to_string(), "Vehicle is not available");
        assert_eq!(AppError::AlreadyCancelled.to_string(), "Rental is already cancelled");
        assert_eq!(
            AppError::HasPendingRental("Client").to_string(),
            "Client has a pending rental"
        );
        assert_eq!(
            AppError::HasPendingRental("Vehicle").to_string(),
            "Vehicle has a pending rental"
        );
        assert_eq!(
            AppError::InvalidDailyPrice.to_string(),
            "Daily price must be greater than 0"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::InvalidDateRange.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("Rental").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom")).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
