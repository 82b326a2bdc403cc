use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{ApplicationStatus, DriverStatus};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub license_no: String,

    #[validate(length(min = 6, max = 15))]
    pub contact_number: String,

    #[validate(length(min = 5))]
    pub address: String,

    pub salary: Decimal,

    pub location_id: Option<Uuid>,

    pub status: Option<String>,

    #[validate(range(min = 0, max = 60))]
    pub experience_years: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDriverRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub license_no: Option<String>,
    #[validate(length(min = 6, max = 15))]
    pub contact_number: Option<String>,
    #[validate(length(min = 5))]
    pub address: Option<String>,
    pub salary: Option<Decimal>,
    pub location_id: Option<Uuid>,
    pub status: Option<String>,
    #[validate(range(min = 0, max = 60))]
    pub experience_years: Option<i32>,
    pub rating: Option<Decimal>,
    #[validate(range(min = 0))]
    pub total_trips: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct DriverQueryParams {
    pub status: Option<String>,
    pub q: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct DriverResponse {
    pub id: Uuid,
    pub name: String,
    pub license_no: String,
    pub contact_number: String,
    pub address: String,
    pub salary: Decimal,
    pub hired_date: NaiveDate,
    pub location_id: Option<Uuid>,
    pub status: DriverStatus,
    pub experience_years: i32,
    pub rating: Decimal,
    pub total_trips: i32,
}

#[derive(Debug, Serialize)]
pub struct DriverStatsResponse {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
    pub on_trip: i64,
    pub average_salary: Decimal,
}

#[derive(Debug, Serialize)]
pub struct DriverListResponse {
    pub drivers: Vec<DriverResponse>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub stats: DriverStatsResponse,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SalaryIncreaseRequest {
    #[validate(length(min = 1))]
    pub driver_ids: Vec<Uuid>,
    pub percentage: Decimal,
}

#[derive(Debug, Serialize)]
pub struct SalaryIncreaseResponse {
    pub updated: u64,
    pub percentage: Decimal,
}

#[derive(Debug, Deserialize, Validate)]
pub struct DriverApplicationRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 100))]
    pub license_no: String,

    #[validate(length(min = 6, max = 15))]
    pub contact_number: String,

    #[validate(length(min = 5))]
    pub address: String,

    #[validate(range(min = 0, max = 60))]
    pub experience_years: Option<i32>,

    pub location_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationQueryParams {
    pub status: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct DriverApplicationResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub license_no: String,
    pub contact_number: String,
    pub address: String,
    pub experience_years: i32,
    pub location_id: Option<Uuid>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RejectApplicationRequest {
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}
