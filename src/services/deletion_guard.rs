//! Guard de borrado
//!
//! Un Client o Vehicle no puede eliminarse mientras lo referencie un
//! rental pendiente: no cancelado y con end_date hoy (UTC) o más
//! adelante. Los rentals cancelados o ya terminados no bloquean.

use crate::repositories::client_repository::ClientRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;

pub struct DeletionGuard {
    clients: ClientRepository,
    vehicles: VehicleRepository,
}

impl DeletionGuard {
    pub fn new(pool: PgPool) -> Self {
        Self {
            clients: ClientRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn can_delete_client(&self, client_id: i32) -> Result<bool, AppError> {
        let today = Utc::now().date_naive();
        Ok(!self.clients.has_pending_rental(client_id, today).await?)
    }

    pub async fn can_delete_vehicle(&self, vehicle_id: i32) -> Result<bool, AppError> {
        let today = Utc::now().date_naive();
        Ok(!self.vehicles.has_pending_rental(vehicle_id, today).await?)
    }
}
