use crate::models::client::{Client, CreateClientRequest};
use crate::repositories::client_repository::ClientRepository;
use crate::services::deletion_guard::DeletionGuard;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;

pub struct ClientController {
    repository: ClientRepository,
    guard: DeletionGuard,
}

impl ClientController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClientRepository::new(pool.clone()),
            guard: DeletionGuard::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        self.repository.list().await
    }

    // Alta directa, sin validación de dominio
    pub async fn create(&self, request: CreateClientRequest) -> Result<Client, AppError> {
        self.repository
            .create(request.first_name, request.last_name)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Client"));
        }

        if !self.guard.can_delete_client(id).await? {
            return Err(AppError::HasPendingRental("Client"));
        }

        // El DELETE re-verifica la condición: un rental creado entre el
        // guard y el borrado lo deja sin efecto.
        let today = Utc::now().date_naive();
        if !self.repository.delete_if_no_pending(id, today).await? {
            return Err(AppError::HasPendingRental("Client"));
        }

        Ok(())
    }
}
