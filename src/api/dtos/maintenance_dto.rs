use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequest {
    pub car_id: Uuid,

    #[validate(length(min = 1, max = 100))]
    pub maintenance_type: String,

    #[validate(length(min = 5))]
    pub description: String,

    pub cost: Decimal,

    pub maintenance_date: NaiveDate,
    pub next_maintenance_date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 100))]
    pub performed_by: String,
}

#[derive(Debug, Deserialize)]
pub struct MaintenanceQueryParams {
    pub car_id: Option<Uuid>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct MaintenanceResponse {
    pub id: Uuid,
    pub car_id: Uuid,
    pub maintenance_type: String,
    pub description: String,
    pub cost: Decimal,
    pub maintenance_date: NaiveDate,
    pub next_maintenance_date: Option<NaiveDate>,
    pub performed_by: String,
}
