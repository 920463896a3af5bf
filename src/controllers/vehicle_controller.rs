use crate::models::vehicle::{CreateVehicleRequest, Vehicle};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::deletion_guard::DeletionGuard;
use crate::utils::errors::AppError;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;

pub struct VehicleController {
    repository: VehicleRepository,
    guard: DeletionGuard,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            guard: DeletionGuard::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        self.repository.list().await
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<Vehicle, AppError> {
        if request.daily_price <= Decimal::ZERO {
            return Err(AppError::InvalidDailyPrice);
        }

        self.repository
            .create(request.model, request.brand, request.daily_price)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Vehicle"));
        }

        if !self.guard.can_delete_vehicle(id).await? {
            return Err(AppError::HasPendingRental("Vehicle"));
        }

        let today = Utc::now().date_naive();
        if !self.repository.delete_if_no_pending(id, today).await? {
            return Err(AppError::HasPendingRental("Vehicle"));
        }

        Ok(())
    }
}
