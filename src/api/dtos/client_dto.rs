use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::common::GroupCountResponse;
use crate::domain::ClientCategory;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50))]
    pub last_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 15))]
    pub phone_number: String,

    #[validate(length(min = 5))]
    pub address: String,

    pub date_of_birth: Option<NaiveDate>,

    #[validate(length(min = 1, max = 50))]
    pub license_number: String,

    pub location_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateClientRequest {
    #[validate(length(min = 1, max = 50))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 6, max = 15))]
    pub phone_number: Option<String>,
    #[validate(length(min = 5))]
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(min = 1, max = 50))]
    pub license_number: Option<String>,
    pub location_id: Option<Uuid>,
    pub is_verified: Option<bool>,
    #[validate(range(min = 300, max = 850))]
    pub credit_score: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct ClientQueryParams {
    pub category: Option<String>,
    pub q: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ClientResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
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

#[derive(Debug, Serialize)]
pub struct ClientListResponse {
    pub clients: Vec<ClientResponse>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub stats: Vec<GroupCountResponse>,
}
