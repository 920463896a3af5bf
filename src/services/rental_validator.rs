//! Validación de rentals
//!
//! Los chequeos corren en orden fijo y cortan en el primer fallo, para
//! que el error reportado sea determinista:
//!
//! 1. fechas: `end > start` y `start >= hoy` (UTC) — `InvalidDateRange`
//! 2. el cliente existe — `ClientNotFound`
//! 3. el vehículo existe y está libre — `VehicleUnavailable` (una sola
//!    señal externa para ambos casos)
//!
//! El validador no muta el request: devuelve un [`ValidatedRental`]
//! nuevo con el Client y el Vehicle ya resueltos.

use crate::models::rental::{CreateRentalRequest, ValidatedRental};
use crate::repositories::client_repository::ClientRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::availability::AvailabilityChecker;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

/// Regla de fechas de un rental: al menos un día entero y sin comienzos
/// retroactivos.
pub fn rental_period_is_valid(start_date: NaiveDate, end_date: NaiveDate, today: NaiveDate) -> bool {
    end_date > start_date && start_date >= today
}

/// `total = días enteros * precio diario`, exacto en Decimal.
/// Se calcula una sola vez al crear y no se recalcula nunca.
pub fn rental_total_price(start_date: NaiveDate, end_date: NaiveDate, daily_price: Decimal) -> Decimal {
    let total_days = (end_date - start_date).num_days();
    Decimal::from(total_days) * daily_price
}

pub struct RentalValidator {
    clients: ClientRepository,
    vehicles: VehicleRepository,
    availability: AvailabilityChecker,
}

impl RentalValidator {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self {
            clients: ClientRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            availability: AvailabilityChecker::new(pool),
        }
    }

    pub async fn validate(
        &self,
        request: &CreateRentalRequest,
    ) -> Result<ValidatedRental, AppError> {
        let today = Utc::now().date_naive();
        if !rental_period_is_valid(request.start_date, request.end_date, today) {
            return Err(AppError::InvalidDateRange);
        }

        let client = self
            .clients
            .find_by_id(request.client_id)
            .await?
            .ok_or(AppError::ClientNotFound)?;

        let vehicle = self
            .vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or(AppError::VehicleUnavailable)?;

        if !self
            .availability
            .is_vehicle_available(vehicle.id, request.start_date, request.end_date)
            .await?
        {
            return Err(AppError::VehicleUnavailable);
        }

        Ok(ValidatedRental {
            client,
            vehicle,
            start_date: request.start_date,
            end_date: request.end_date,
        })
    }
}
