use crate::models::client::Client;
use crate::models::rental::{Rental, RentalResponse, ValidatedRental};
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;
use anyhow::Context;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

/// Fila plana del JOIN rentals + clients + vehicles
#[derive(Debug, FromRow)]
struct RentalJoinRow {
    id: i32,
    client_id: i32,
    vehicle_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    total_price: Decimal,
    is_cancelled: bool,
    first_name: String,
    last_name: String,
    model: String,
    brand: String,
    daily_price: Decimal,
}

impl From<RentalJoinRow> for RentalResponse {
    fn from(row: RentalJoinRow) -> Self {
        RentalResponse {
            id: row.id,
            client_id: row.client_id,
            client: Client {
                id: row.client_id,
                first_name: row.first_name,
                last_name: row.last_name,
            },
            vehicle_id: row.vehicle_id,
            vehicle: Vehicle {
                id: row.vehicle_id,
                model: row.model,
                brand: row.brand,
                daily_price: row.daily_price,
            },
            start_date: row.start_date,
            end_date: row.end_date,
            total_price: row.total_price,
            is_cancelled: row.is_cancelled,
        }
    }
}

pub struct RentalRepository {
    pool: PgPool,
}

impl RentalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Rental>, AppError> {
        let rental = sqlx::query_as::<_, Rental>("SELECT * FROM rentals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Error finding rental")?;

        Ok(rental)
    }

    /// Listado con Client y Vehicle embebidos
    pub async fn list_with_refs(&self) -> Result<Vec<RentalResponse>, AppError> {
        let rows = sqlx::query_as::<_, RentalJoinRow>(
            r#"
            SELECT r.id, r.client_id, r.vehicle_id, r.start_date, r.end_date,
                   r.total_price, r.is_cancelled,
                   c.first_name, c.last_name,
                   v.model, v.brand, v.daily_price
            FROM rentals r
            JOIN clients c ON c.id = r.client_id
            JOIN vehicles v ON v.id = r.vehicle_id
            ORDER BY r.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Error listing rentals")?;

        Ok(rows.into_iter().map(RentalResponse::from).collect())
    }

    /// Rentals no cancelados de un vehículo
    pub async fn find_active_by_vehicle(&self, vehicle_id: i32) -> Result<Vec<Rental>, AppError> {
        let rentals = sqlx::query_as::<_, Rental>(
            "SELECT * FROM rentals WHERE vehicle_id = $1 AND NOT is_cancelled ORDER BY start_date",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await
        .context("Error listing rentals for vehicle")?;

        Ok(rentals)
    }

    /// Inserción condicional: solo inserta si en el momento del INSERT
    /// ningún rental no cancelado del vehículo solapa el rango
    /// (bordes inclusive). Devuelve None si un rental concurrente ganó
    /// la carrera por el mismo rango.
    pub async fn create_if_vehicle_free(
        &self,
        validated: &ValidatedRental,
        total_price: Decimal,
    ) -> Result<Option<Rental>, AppError> {
        let rental = sqlx::query_as::<_, Rental>(
            r#"
            INSERT INTO rentals (client_id, vehicle_id, start_date, end_date, total_price, is_cancelled)
            SELECT $1, $2, $3, $4, $5, FALSE
            WHERE NOT EXISTS(
                SELECT 1 FROM rentals
                WHERE vehicle_id = $2
                  AND NOT is_cancelled
                  AND start_date <= $4
                  AND end_date >= $3
            )
            RETURNING *
            "#,
        )
        .bind(validated.client.id)
        .bind(validated.vehicle.id)
        .bind(validated.start_date)
        .bind(validated.end_date)
        .bind(total_price)
        .fetch_optional(&self.pool)
        .await
        .context("Error creating rental")?;

        Ok(rental)
    }

    /// Cancelación condicional: la transición Active -> Cancelled es
    /// monótona, el WHERE descarta el doble-cancel. Devuelve None si el
    /// rental ya estaba cancelado al ejecutar el UPDATE.
    pub async fn cancel(&self, id: i32) -> Result<Option<Rental>, AppError> {
        let rental = sqlx::query_as::<_, Rental>(
            "UPDATE rentals SET is_cancelled = TRUE WHERE id = $1 AND NOT is_cancelled RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Error cancelling rental")?;

        Ok(rental)
    }
}
