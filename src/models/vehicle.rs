//! Modelo de Vehicle
//!
//! Mapea a la tabla `vehicles`. Invariante: `daily_price > 0`,
//! verificado al crear y respaldado por un CHECK en el schema.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i32,
    pub model: String,
    pub brand: String,
    pub daily_price: Decimal,
}

/// Request para crear un vehículo (sin id)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    pub model: String,
    pub brand: String,
    pub daily_price: Decimal,
}
