use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::common::GroupCountResponse;
use crate::domain::OrderStatus;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderRequest {
    pub car_id: Uuid,
    pub client_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub pickup_location_id: Option<Uuid>,
    pub dropoff_location_id: Option<Uuid>,
    pub total_amount: Decimal,
    #[validate(length(max = 2000))]
    pub special_requirements: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateOrderRequest {
    pub driver_id: Option<Uuid>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub pickup_location_id: Option<Uuid>,
    pub dropoff_location_id: Option<Uuid>,
    pub total_amount: Option<Decimal>,
    pub status: Option<String>,
    #[validate(length(max = 2000))]
    pub special_requirements: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OrderQueryParams {
    pub status: Option<String>,
    pub client_category: Option<String>,
    pub q: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
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

/// List row carrying the display names of the related records.
#[derive(Debug, Serialize)]
pub struct OrderRow {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub car_name: String,
    pub client_name: String,
    pub driver_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OrderListResponse {
    pub orders: Vec<OrderRow>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub stats: Vec<GroupCountResponse>,
}
