//! Disponibilidad de vehículos
//!
//! Este módulo decide si un vehículo está libre para un rango de
//! fechas candidato. Dos rangos entran en conflicto si
//! `existente.start <= candidato.end && existente.end >= candidato.start`
//! (bordes inclusive: la devolución y la entrega el mismo día chocan).

use crate::repositories::rental_repository::RentalRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use chrono::NaiveDate;
use sqlx::PgPool;

/// ¿Solapan dos rangos de fechas? Bordes inclusive.
pub fn ranges_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start <= b_end && a_end >= b_start
}

pub struct AvailabilityChecker {
    vehicles: VehicleRepository,
    rentals: RentalRepository,
}

impl AvailabilityChecker {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            rentals: RentalRepository::new(pool),
        }
    }

    /// Lectura pura del estado actual del store: false si el vehículo
    /// no existe o si algún rental no cancelado solapa el candidato.
    pub async fn is_vehicle_available(
        &self,
        vehicle_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<bool, AppError> {
        if self.vehicles.find_by_id(vehicle_id).await?.is_none() {
            return Ok(false);
        }

        let existing = self.rentals.find_active_by_vehicle(vehicle_id).await?;
        let free = !existing
            .iter()
            .any(|r| ranges_overlap(r.start_date, r.end_date, start_date, end_date));

        Ok(free)
    }
}
