use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Ongoing,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RentalOrder {
    pub id: Uuid,
    pub reference: String,
    pub car_id: Uuid,
    pub client_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub pickup_location_id: Option<Uuid>,
    pub dropoff_location_id: Option<Uuid>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub special_requirements: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RentalOrder {
    /// Human-readable booking code, e.g. `BHR4F9A21C3`.
    pub fn new_reference() -> String {
        let hex = Uuid::new_v4().simple().to_string();
        format!("BHR{}", hex[..8].to_uppercase())
    }

    pub fn validate_window(&self) -> Result<(), DomainError> {
        if self.end_date <= self.start_date {
            return Err(DomainError::ValidationError(
                "Rental end date must be after the start date".to_string(),
            ));
        }
        Ok(())
    }
}
