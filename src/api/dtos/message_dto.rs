use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::MessageType;

#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 200))]
    pub sender_name: String,

    #[validate(email)]
    pub sender_email: String,

    #[validate(length(min = 1, max = 200))]
    pub subject: String,

    pub message_type: Option<String>,

    #[validate(length(min = 10, message = "Please provide a more detailed message"))]
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageQueryParams {
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub message_type: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RespondRequest {
    #[validate(length(min = 1, max = 5000))]
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub sender_name: String,
    pub sender_email: String,
    pub message_type: MessageType,
    pub subject: String,
    pub body: String,
    pub is_read: bool,
    pub response: Option<String>,
    pub responded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
