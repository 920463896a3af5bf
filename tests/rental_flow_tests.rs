//! Tests de integración del ciclo de vida de rentals contra un
//! Postgres real.
//!
//! Requieren `DATABASE_URL`; se corren con `cargo test -- --ignored`.
//! Cada test crea sus propios clientes y vehículos, así que pueden
//! correr sobre una base compartida.

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use car_rental_backend::controllers::client_controller::ClientController;
use car_rental_backend::controllers::rental_controller::RentalController;
use car_rental_backend::controllers::vehicle_controller::VehicleController;
use car_rental_backend::database;
use car_rental_backend::models::client::{Client, CreateClientRequest};
use car_rental_backend::models::rental::CreateRentalRequest;
use car_rental_backend::models::vehicle::{CreateVehicleRequest, Vehicle};
use car_rental_backend::services::availability::AvailabilityChecker;
use car_rental_backend::utils::errors::AppError;

async fn setup_pool() -> PgPool {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for these tests");
    let pool = PgPool::connect(&url).await.expect("connect");
    database::run_migrations(&pool).await.expect("migrations");
    pool
}

async fn create_client(pool: &PgPool) -> Client {
    ClientController::new(pool.clone())
        .create(CreateClientRequest {
            first_name: "Carlos".to_string(),
            last_name: "Gonzales".to_string(),
        })
        .await
        .expect("create client")
}

async fn create_vehicle(pool: &PgPool, daily_price: Decimal) -> Vehicle {
    VehicleController::new(pool.clone())
        .create(CreateVehicleRequest {
            model: "Civic".to_string(),
            brand: "Honda".to_string(),
            daily_price,
        })
        .await
        .expect("create vehicle")
}

fn rental_request(client_id: i32, vehicle_id: i32, start: NaiveDate, end: NaiveDate) -> CreateRentalRequest {
    CreateRentalRequest {
        client_id,
        vehicle_id,
        start_date: start,
        end_date: end,
    }
}

fn day(offset: i64) -> NaiveDate {
    Utc::now().date_naive() + Duration::days(offset)
}

#[tokio::test]
#[ignore]
async fn test_rental_is_priced_by_whole_days() {
    let pool = setup_pool().await;
    let client = create_client(&pool).await;
    let vehicle = create_vehicle(&pool, Decimal::from(70)).await;
    let rentals = RentalController::new(pool.clone());

    // Hoy a mañana: 1 día a 70 -> 70
    let created = rentals
        .create(rental_request(client.id, vehicle.id, day(0), day(1)))
        .await
        .expect("create rental");

    assert!(created.id >= 1);
    assert_eq!(created.total_price, Decimal::from(70));
    assert!(!created.is_cancelled);
    assert_eq!(created.client.first_name, "Carlos");
    assert_eq!(created.vehicle.model, "Civic");
}

#[tokio::test]
#[ignore]
async fn test_back_to_back_rentals_do_not_conflict() {
    let pool = setup_pool().await;
    let client = create_client(&pool).await;
    let vehicle = create_vehicle(&pool, Decimal::from(50)).await;
    let rentals = RentalController::new(pool.clone());

    rentals
        .create(rental_request(client.id, vehicle.id, day(10), day(12)))
        .await
        .expect("first rental");

    // Rango disjunto (sin compartir el día de borde): admitido
    rentals
        .create(rental_request(client.id, vehicle.id, day(13), day(15)))
        .await
        .expect("second rental");
}

#[tokio::test]
#[ignore]
async fn test_overlapping_rental_is_rejected() {
    let pool = setup_pool().await;
    let client = create_client(&pool).await;
    let vehicle = create_vehicle(&pool, Decimal::from(50)).await;
    let rentals = RentalController::new(pool.clone());

    rentals
        .create(rental_request(client.id, vehicle.id, day(10), day(14)))
        .await
        .expect("first rental");

    let err = rentals
        .create(rental_request(client.id, vehicle.id, day(12), day(16)))
        .await
        .expect_err("overlap must be rejected");
    assert!(matches!(err, AppError::VehicleUnavailable));
}

#[tokio::test]
#[ignore]
async fn test_shared_boundary_day_is_rejected() {
    let pool = setup_pool().await;
    let client = create_client(&pool).await;
    let vehicle = create_vehicle(&pool, Decimal::from(50)).await;
    let rentals = RentalController::new(pool.clone());

    rentals
        .create(rental_request(client.id, vehicle.id, day(10), day(11)))
        .await
        .expect("first rental");

    // Devolución y entrega el mismo día: conflicto
    let err = rentals
        .create(rental_request(client.id, vehicle.id, day(11), day(12)))
        .await
        .expect_err("boundary day must conflict");
    assert!(matches!(err, AppError::VehicleUnavailable));
}

#[tokio::test]
#[ignore]
async fn test_cancelled_rental_frees_the_vehicle() {
    let pool = setup_pool().await;
    let client = create_client(&pool).await;
    let vehicle = create_vehicle(&pool, Decimal::from(50)).await;
    let rentals = RentalController::new(pool.clone());

    let first = rentals
        .create(rental_request(client.id, vehicle.id, day(10), day(14)))
        .await
        .expect("first rental");

    let cancelled = rentals.cancel(first.id).await.expect("cancel");
    assert!(cancelled.is_cancelled);

    let checker = AvailabilityChecker::new(pool.clone());
    assert!(checker
        .is_vehicle_available(vehicle.id, day(10), day(14))
        .await
        .expect("availability"));

    rentals
        .create(rental_request(client.id, vehicle.id, day(10), day(14)))
        .await
        .expect("same range after cancel");
}

#[tokio::test]
#[ignore]
async fn test_cancel_is_not_idempotent_in_result() {
    let pool = setup_pool().await;
    let client = create_client(&pool).await;
    let vehicle = create_vehicle(&pool, Decimal::from(50)).await;
    let rentals = RentalController::new(pool.clone());

    let rental = rentals
        .create(rental_request(client.id, vehicle.id, day(10), day(12)))
        .await
        .expect("create");

    rentals.cancel(rental.id).await.expect("first cancel");

    let err = rentals.cancel(rental.id).await.expect_err("second cancel");
    assert!(matches!(err, AppError::AlreadyCancelled));
}

#[tokio::test]
#[ignore]
async fn test_cancel_missing_rental_is_not_found() {
    let pool = setup_pool().await;
    let rentals = RentalController::new(pool.clone());

    let err = rentals.cancel(i32::MAX).await.expect_err("missing rental");
    assert!(matches!(err, AppError::NotFound("Rental")));
}

#[tokio::test]
#[ignore]
async fn test_pending_rental_blocks_deletion_until_cancelled() {
    let pool = setup_pool().await;
    let client = create_client(&pool).await;
    let vehicle = create_vehicle(&pool, Decimal::from(50)).await;
    let clients = ClientController::new(pool.clone());
    let vehicles = VehicleController::new(pool.clone());
    let rentals = RentalController::new(pool.clone());

    let rental = rentals
        .create(rental_request(client.id, vehicle.id, day(10), day(12)))
        .await
        .expect("create");

    let err = clients.delete(client.id).await.expect_err("client blocked");
    assert!(matches!(err, AppError::HasPendingRental("Client")));

    let err = vehicles.delete(vehicle.id).await.expect_err("vehicle blocked");
    assert!(matches!(err, AppError::HasPendingRental("Vehicle")));

    rentals.cancel(rental.id).await.expect("cancel");

    clients.delete(client.id).await.expect("client deletable");
    vehicles.delete(vehicle.id).await.expect("vehicle deletable");
}

#[tokio::test]
#[ignore]
async fn test_delete_client_without_rentals_succeeds() {
    let pool = setup_pool().await;
    let client = create_client(&pool).await;
    let clients = ClientController::new(pool.clone());

    clients.delete(client.id).await.expect("delete");

    let err = clients.delete(client.id).await.expect_err("already gone");
    assert!(matches!(err, AppError::NotFound("Client")));
}
