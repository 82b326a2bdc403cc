use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "driver_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    Active,
    Inactive,
    OnTrip,
    Suspended,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Driver {
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Reviewing,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DriverApplication {
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

impl DriverApplication {
    pub fn is_open(&self) -> bool {
        matches!(
            self.status,
            ApplicationStatus::Pending | ApplicationStatus::Reviewing
        )
    }
}

/// A raise below -100% would drive salaries negative; anything else is a
/// legal adjustment (including decreases).
pub fn validate_salary_adjustment(percentage: Decimal) -> Result<(), DomainError> {
    if percentage <= Decimal::new(-100, 0) {
        return Err(DomainError::BusinessRuleViolation(
            "Salary adjustment cannot reduce pay to zero or below".to_string(),
        ));
    }
    Ok(())
}
