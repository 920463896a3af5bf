use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;
use anyhow::Context;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        model: String,
        brand: String,
        daily_price: Decimal,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "INSERT INTO vehicles (model, brand, daily_price) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(model)
        .bind(brand)
        .bind(daily_price)
        .fetch_one(&self.pool)
        .await
        .context("Error creating vehicle")?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Error finding vehicle")?;

        Ok(vehicle)
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Error listing vehicles")?;

        Ok(vehicles)
    }

    /// ¿Tiene el vehículo algún rental pendiente (no cancelado y con
    /// end_date >= hoy)?
    pub async fn has_pending_rental(&self, id: i32, today: NaiveDate) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM rentals
                WHERE vehicle_id = $1 AND NOT is_cancelled AND end_date >= $2
            )
            "#,
        )
        .bind(id)
        .bind(today)
        .fetch_one(&self.pool)
        .await
        .context("Error checking pending rentals for vehicle")?;

        Ok(result.0)
    }

    /// Borrado condicional contra rentals pendientes; false si un
    /// rental concurrente ganó la carrera.
    pub async fn delete_if_no_pending(&self, id: i32, today: NaiveDate) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM vehicles
            WHERE id = $1
              AND NOT EXISTS(
                  SELECT 1 FROM rentals
                  WHERE vehicle_id = $1 AND NOT is_cancelled AND end_date >= $2
              )
            "#,
        )
        .bind(id)
        .bind(today)
        .execute(&self.pool)
        .await
        .context("Error deleting vehicle")?;

        Ok(result.rows_affected() > 0)
    }
}
