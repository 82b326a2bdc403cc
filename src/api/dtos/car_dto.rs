use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::location_dto::LocationResponse;
use crate::domain::{CarStatus, FuelType, Transmission};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCarRequest {
    #[validate(length(min = 1, max = 100))]
    pub car_name: String,

    #[validate(length(min = 1, max = 100))]
    pub company_name: String,

    #[validate(range(min = 1980, max = 2030))]
    pub model_year: Option<i32>,

    #[validate(range(min = 1, max = 60))]
    pub num_of_seats: i32,

    pub cost_per_day: Decimal,

    #[validate(length(min = 10))]
    pub description: String,

    pub status: Option<String>,
    pub transmission: Option<String>,
    pub fuel_type: Option<String>,
    pub mileage: Option<Decimal>,
    pub location_id: Option<Uuid>,

    #[validate(length(min = 3, max = 20))]
    pub license_plate: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCarRequest {
    #[validate(length(min = 1, max = 100))]
    pub car_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub company_name: Option<String>,
    #[validate(range(min = 1980, max = 2030))]
    pub model_year: Option<i32>,
    #[validate(range(min = 1, max = 60))]
    pub num_of_seats: Option<i32>,
    pub cost_per_day: Option<Decimal>,
    #[validate(length(min = 10))]
    pub description: Option<String>,
    pub status: Option<String>,
    pub transmission: Option<String>,
    pub fuel_type: Option<String>,
    pub mileage: Option<Decimal>,
    pub location_id: Option<Uuid>,
    #[validate(length(min = 3, max = 20))]
    pub license_plate: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CarQueryParams {
    pub q: Option<String>,
    pub status: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub location_id: Option<Uuid>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CarResponse {
    pub id: Uuid,
    pub car_name: String,
    pub company_name: String,
    pub display_name: String,
    pub model_year: Option<i32>,
    pub num_of_seats: i32,
    pub cost_per_day: Decimal,
    pub description: String,
    pub likes: i32,
    pub status: CarStatus,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub mileage: Option<Decimal>,
    pub location_id: Option<Uuid>,
    pub license_plate: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub id: Uuid,
    pub likes: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct NearestCarsQuery {
    /// Location record to measure from.
    pub location_id: Uuid,
    /// Search radius in kilometres; defaults to 50 when omitted.
    pub radius_km: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NearbyCarResponse {
    pub distance_km: f64,
    pub car: CarResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NearestCarsResponse {
    pub location: LocationResponse,
    pub radius_km: f64,
    pub cars: Vec<NearbyCarResponse>,
}
