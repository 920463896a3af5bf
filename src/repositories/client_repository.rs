use crate::models::client::Client;
use crate::utils::errors::AppError;
use anyhow::Context;
use chrono::NaiveDate;
use sqlx::PgPool;

pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, first_name: String, last_name: String) -> Result<Client, AppError> {
        let client = sqlx::query_as::<_, Client>(
            "INSERT INTO clients (first_name, last_name) VALUES ($1, $2) RETURNING *",
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_one(&self.pool)
        .await
        .context("Error creating client")?;

        Ok(client)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Error finding client")?;

        Ok(client)
    }

    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Error listing clients")?;

        Ok(clients)
    }

    /// ¿Tiene el cliente algún rental pendiente (no cancelado y con
    /// end_date >= hoy)?
    pub async fn has_pending_rental(&self, id: i32, today: NaiveDate) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM rentals
                WHERE client_id = $1 AND NOT is_cancelled AND end_date >= $2
            )
            "#,
        )
        .bind(id)
        .bind(today)
        .fetch_one(&self.pool)
        .await
        .context("Error checking pending rentals for client")?;

        Ok(result.0)
    }

    /// Borrado condicional: solo elimina si en el momento del DELETE no
    /// existe ningún rental pendiente. Devuelve false si el guard
    /// perdió la carrera contra un rental creado concurrentemente.
    pub async fn delete_if_no_pending(&self, id: i32, today: NaiveDate) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM clients
            WHERE id = $1
              AND NOT EXISTS(
                  SELECT 1 FROM rentals
                  WHERE client_id = $1 AND NOT is_cancelled AND end_date >= $2
              )
            "#,
        )
        .bind(id)
        .bind(today)
        .execute(&self.pool)
        .await
        .context("Error deleting client")?;

        Ok(result.rows_affected() > 0)
    }
}
