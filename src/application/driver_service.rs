use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{
    ApplicationQueryParams, CreateDriverRequest, DriverApplicationRequest,
    DriverApplicationResponse, DriverListResponse, DriverQueryParams, DriverResponse,
    DriverStatsResponse, PaginatedResponse, RejectApplicationRequest, SalaryIncreaseRequest,
    SalaryIncreaseResponse, UpdateDriverRequest,
};
use crate::domain::driver::validate_salary_adjustment;
use crate::domain::{ApplicationStatus, Driver, DriverApplication, DriverStatus};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::{DriverListParams, DriverRepository};

use super::normalize_pagination;

/// Salary assigned to drivers hired straight from an approved application.
const STARTING_SALARY: Decimal = Decimal::from_parts(25_000, 0, 0, false, 0);

#[derive(Clone)]
pub struct DriverService {
    driver_repo: Arc<dyn DriverRepository>,
}

impl DriverService {
    pub fn new(driver_repo: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repo }
    }

    pub async fn list(&self, params: DriverQueryParams) -> AppResult<DriverListResponse> {
        let (page, limit, offset) = normalize_pagination(params.page, params.limit);

        let list_params = DriverListParams {
            status: params.status.as_deref().map(parse_status).transpose()?,
            query: params.q,
        };

        let drivers = self.driver_repo.list(&list_params, limit, offset).await?;
        let total = self.driver_repo.count_list(&list_params).await?;

        let stats = DriverStatsResponse {
            total: self.driver_repo.count_all().await?,
            active: self
                .driver_repo
                .count_by_status(DriverStatus::Active)
                .await?,
            inactive: self
                .driver_repo
                .count_by_status(DriverStatus::Inactive)
                .await?,
            on_trip: self
                .driver_repo
                .count_by_status(DriverStatus::OnTrip)
                .await?,
            average_salary: self.driver_repo.average_salary().await?.unwrap_or_default(),
        };

        Ok(DriverListResponse {
            drivers: drivers.into_iter().map(map_driver).collect(),
            total,
            page,
            limit,
            stats,
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<DriverResponse> {
        let driver = self
            .driver_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("driver not found".to_string()))?;
        Ok(map_driver(driver))
    }

    pub async fn create(&self, request: CreateDriverRequest) -> AppResult<DriverResponse> {
        request.validate()?;

        if request.salary <= Decimal::ZERO {
            return Err(AppError::validation_error(
                "Salary must be greater than zero",
            ));
        }

        let driver = Driver {
            id: Uuid::new_v4(),
            name: request.name,
            license_no: request.license_no,
            contact_number: request.contact_number,
            address: request.address,
            salary: request.salary,
            hired_date: Utc::now().date_naive(),
            location_id: request.location_id,
            status: request
                .status
                .as_deref()
                .map(parse_status)
                .transpose()?
                .unwrap_or(DriverStatus::Active),
            experience_years: request.experience_years.unwrap_or(0),
            rating: Decimal::new(500, 2),
            total_trips: 0,
        };

        let created = self.driver_repo.create(&driver).await?;
        info!(driver_id = %created.id, "driver hired");
        Ok(map_driver(created))
    }

    pub async fn update(&self, id: Uuid, request: UpdateDriverRequest) -> AppResult<DriverResponse> {
        request.validate()?;

        let mut existing = self
            .driver_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("driver not found".to_string()))?;

        if let Some(name) = request.name {
            existing.name = name;
        }
        if let Some(license_no) = request.license_no {
            existing.license_no = license_no;
        }
        if let Some(contact_number) = request.contact_number {
            existing.contact_number = contact_number;
        }
        if let Some(address) = request.address {
            existing.address = address;
        }
        if let Some(salary) = request.salary {
            if salary <= Decimal::ZERO {
                return Err(AppError::validation_error(
                    "Salary must be greater than zero",
                ));
            }
            existing.salary = salary;
        }
        if let Some(location_id) = request.location_id {
            existing.location_id = Some(location_id);
        }
        if let Some(status) = request.status {
            existing.status = parse_status(&status)?;
        }
        if let Some(experience_years) = request.experience_years {
            existing.experience_years = experience_years;
        }
        if let Some(rating) = request.rating {
            if rating < Decimal::ZERO || rating > Decimal::new(500, 2) {
                return Err(AppError::validation_error(
                    "Rating must be between 0.00 and 5.00",
                ));
            }
            existing.rating = rating;
        }
        if let Some(total_trips) = request.total_trips {
            existing.total_trips = total_trips;
        }

        let updated = self.driver_repo.update(&existing).await?;
        Ok(map_driver(updated))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.driver_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("driver not found".to_string()))?;
        self.driver_repo.delete(id).await
    }

    /// Percentage raise for the selected drivers, applied in one statement.
    pub async fn increase_salaries(
        &self,
        request: SalaryIncreaseRequest,
    ) -> AppResult<SalaryIncreaseResponse> {
        request.validate()?;
        validate_salary_adjustment(request.percentage)?;

        let updated = self
            .driver_repo
            .increase_salaries(&request.driver_ids, request.percentage)
            .await?;

        info!(
            updated = updated,
            percentage = %request.percentage,
            "bulk driver salary adjustment"
        );

        Ok(SalaryIncreaseResponse {
            updated,
            percentage: request.percentage,
        })
    }

    pub async fn apply(
        &self,
        request: DriverApplicationRequest,
    ) -> AppResult<DriverApplicationResponse> {
        request.validate()?;

        let application = DriverApplication {
            id: Uuid::new_v4(),
            name: request.name,
            email: request.email,
            license_no: request.license_no,
            contact_number: request.contact_number,
            address: request.address,
            experience_years: request.experience_years.unwrap_or(0),
            location_id: request.location_id,
            status: ApplicationStatus::Pending,
            applied_at: Utc::now(),
            reviewed_at: None,
            notes: None,
        };

        let created = self.driver_repo.create_application(&application).await?;
        Ok(map_application(created))
    }

    pub async fn list_applications(
        &self,
        params: ApplicationQueryParams,
    ) -> AppResult<PaginatedResponse<DriverApplicationResponse>> {
        let (page, limit, offset) = normalize_pagination(params.page, params.limit);
        let status = params
            .status
            .as_deref()
            .map(parse_application_status)
            .transpose()?;

        let applications = self
            .driver_repo
            .list_applications(status, limit, offset)
            .await?;
        let total = self.driver_repo.count_applications(status).await?;

        Ok(PaginatedResponse::new(
            applications.into_iter().map(map_application).collect(),
            total,
            page,
            limit,
        ))
    }

    /// Promotes an open application to a hired driver; the insert and the
    /// status flip land in the same transaction.
    pub async fn approve_application(&self, id: Uuid) -> AppResult<DriverResponse> {
        let driver = self
            .driver_repo
            .approve_application(id, STARTING_SALARY)
            .await?;

        info!(
            application_id = %id,
            driver_id = %driver.id,
            "driver application approved"
        );
        Ok(map_driver(driver))
    }

    pub async fn reject_application(
        &self,
        id: Uuid,
        request: RejectApplicationRequest,
    ) -> AppResult<DriverApplicationResponse> {
        request.validate()?;

        let rejected = self.driver_repo.reject_application(id, request.notes).await?;
        info!(application_id = %id, "driver application rejected");
        Ok(map_application(rejected))
    }
}

fn map_driver(driver: Driver) -> DriverResponse {
    DriverResponse {
        id: driver.id,
        name: driver.name,
        license_no: driver.license_no,
        contact_number: driver.contact_number,
        address: driver.address,
        salary: driver.salary,
        hired_date: driver.hired_date,
        location_id: driver.location_id,
        status: driver.status,
        experience_years: driver.experience_years,
        rating: driver.rating,
        total_trips: driver.total_trips,
    }
}

fn map_application(application: DriverApplication) -> DriverApplicationResponse {
    DriverApplicationResponse {
        id: application.id,
        name: application.name,
        email: application.email,
        license_no: application.license_no,
        contact_number: application.contact_number,
        address: application.address,
        experience_years: application.experience_years,
        location_id: application.location_id,
        status: application.status,
        applied_at: application.applied_at,
        reviewed_at: application.reviewed_at,
        notes: application.notes,
    }
}

fn parse_status(raw: &str) -> AppResult<DriverStatus> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "active" => Ok(DriverStatus::Active),
        "inactive" => Ok(DriverStatus::Inactive),
        "on_trip" => Ok(DriverStatus::OnTrip),
        "suspended" => Ok(DriverStatus::Suspended),
        _ => Err(AppError::validation_error(
            "Status must be one of: active, inactive, on_trip, suspended",
        )),
    }
}

fn parse_application_status(raw: &str) -> AppResult<ApplicationStatus> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "pending" => Ok(ApplicationStatus::Pending),
        "reviewing" => Ok(ApplicationStatus::Reviewing),
        "approved" => Ok(ApplicationStatus::Approved),
        "rejected" => Ok(ApplicationStatus::Rejected),
        _ => Err(AppError::validation_error(
            "Status must be one of: pending, reviewing, approved, rejected",
        )),
    }
}
