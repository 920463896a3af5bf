//! Ciclo de vida de los rentals
//!
//! Creación con precio derivado y cancelación monótona. Un rental se
//! crea únicamente por este camino (nunca inserción directa) y nunca se
//! borra físicamente: solo pasa de Active a Cancelled.

use crate::models::rental::{CreateRentalRequest, Rental, RentalResponse};
use crate::repositories::rental_repository::RentalRepository;
use crate::services::rental_validator::{rental_total_price, RentalValidator};
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct RentalController {
    validator: RentalValidator,
    repository: RentalRepository,
}

impl RentalController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            validator: RentalValidator::new(pool.clone()),
            repository: RentalRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<RentalResponse>, AppError> {
        self.repository.list_with_refs().await
    }

    pub async fn create(&self, request: CreateRentalRequest) -> Result<RentalResponse, AppError> {
        let validated = self.validator.validate(&request).await?;

        let total_price = rental_total_price(
            validated.start_date,
            validated.end_date,
            validated.vehicle.daily_price,
        );

        // La inserción re-verifica el solape: si otro rental ganó la
        // carrera por el mismo rango, la señal externa es la misma que
        // la del chequeo de disponibilidad.
        let rental = self
            .repository
            .create_if_vehicle_free(&validated, total_price)
            .await?
            .ok_or(AppError::VehicleUnavailable)?;

        Ok(RentalResponse::from_parts(
            rental,
            validated.client,
            validated.vehicle,
        ))
    }

    /// Cancelar no es idempotente en resultado: la segunda llamada
    /// sobre el mismo rental devuelve `AlreadyCancelled`.
    pub async fn cancel(&self, id: i32) -> Result<Rental, AppError> {
        let rental = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Rental"))?;

        if rental.is_cancelled {
            return Err(AppError::AlreadyCancelled);
        }

        // El UPDATE condicional cubre el doble-cancel concurrente
        self.repository
            .cancel(id)
            .await?
            .ok_or(AppError::AlreadyCancelled)
    }
}
