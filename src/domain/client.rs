use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "client_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ClientCategory {
    Regular,
    Corporate,
    Premium,
    Vip,
}

impl ClientCategory {
    /// Category tiers derive from lifetime booking counts; a client is
    /// never assigned a category directly.
    pub fn from_total_bookings(total_bookings: i32) -> Self {
        if total_bookings >= 50 {
            ClientCategory::Vip
        } else if total_bookings >= 20 {
            ClientCategory::Premium
        } else if total_bookings >= 5 {
            ClientCategory::Corporate
        } else {
            ClientCategory::Regular
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub date_of_birth: Option<NaiveDate>,
    pub license_number: String,
    pub category: ClientCategory,
    pub location_id: Option<Uuid>,
    pub is_verified: bool,
    pub credit_score: i32,
    pub total_bookings: i32,
    pub created_at: DateTime<Utc>,
}

impl Client {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
