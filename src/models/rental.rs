//! Modelo de Rental
//!
//! Mapea a la tabla `rentals`. Un rental nunca se borra físicamente:
//! su ciclo de vida es `Active -> Cancelled` vía el flag `is_cancelled`.
//!
//! Las referencias a Client/Vehicle existen en dos estados con tipos
//! distintos: el request trae solo los ids (sin resolver) y
//! [`ValidatedRental`] trae las entidades ya resueltas contra el store.
//! El validador produce el segundo a partir del primero sin mutarlo,
//! así que ningún tipo navega por un `Option<Client>`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::client::Client;
use super::vehicle::Vehicle;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: i32,
    pub client_id: i32,
    pub vehicle_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: Decimal,
    pub is_cancelled: bool,
}

/// Request para crear un rental: referencias sin resolver (solo ids)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalRequest {
    pub client_id: i32,
    pub vehicle_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Candidato admitido por el validador: referencias resueltas.
/// Listo para el cálculo de precio y la inserción.
#[derive(Debug, Clone)]
pub struct ValidatedRental {
    pub client: Client,
    pub vehicle: Vehicle,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Response de rental con Client y Vehicle embebidos (GET /rentals,
/// POST /rentals)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalResponse {
    pub id: i32,
    pub client_id: i32,
    pub client: Client,
    pub vehicle_id: i32,
    pub vehicle: Vehicle,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: Decimal,
    pub is_cancelled: bool,
}

impl RentalResponse {
    pub fn from_parts(rental: Rental, client: Client, vehicle: Vehicle) -> Self {
        Self {
            id: rental.id,
            client_id: rental.client_id,
            client,
            vehicle_id: rental.vehicle_id,
            vehicle,
            start_date: rental.start_date,
            end_date: rental.end_date,
            total_price: rental.total_price,
            is_cancelled: rental.is_cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rental_wire_field_names() {
        let rental = Rental {
            id: 3,
            client_id: 1,
            vehicle_id: 2,
            start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 9, 4).unwrap(),
            total_price: Decimal::from(210),
            is_cancelled: false,
        };
        let json = serde_json::to_value(&rental).unwrap();
        assert_eq!(json["clientId"], 1);
        assert_eq!(json["vehicleId"], 2);
        assert_eq!(json["startDate"], "2026-09-01");
        assert_eq!(json["endDate"], "2026-09-04");
        assert_eq!(json["isCancelled"], false);
    }

    #[test]
    fn test_create_request_deserializes_camel_case() {
        let req: CreateRentalRequest = serde_json::from_value(serde_json::json!({
            "clientId": 1,
            "vehicleId": 2,
            "startDate": "2026-09-01",
            "endDate": "2026-09-02"
        }))
        .unwrap();
        assert_eq!(req.client_id, 1);
        assert_eq!(req.vehicle_id, 2);
        assert_eq!(
            req.end_date - req.start_date,
            chrono::Duration::days(1)
        );
    }
}
