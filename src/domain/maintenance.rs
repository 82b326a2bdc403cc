use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub car_id: Uuid,
    pub maintenance_type: String,
    pub description: String,
    pub cost: Decimal,
    pub maintenance_date: NaiveDate,
    pub next_maintenance_date: Option<NaiveDate>,
    pub performed_by: String,
}
