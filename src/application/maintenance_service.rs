use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{
    CreateMaintenanceRequest, MaintenanceQueryParams, MaintenanceResponse, PaginatedResponse,
};
use crate::domain::MaintenanceRecord;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::{CarRepository, MaintenanceRepository};

use super::normalize_pagination;

#[derive(Clone)]
pub struct MaintenanceService {
    maintenance_repo: Arc<dyn MaintenanceRepository>,
    car_repo: Arc<dyn CarRepository>,
}

impl MaintenanceService {
    pub fn new(
        maintenance_repo: Arc<dyn MaintenanceRepository>,
        car_repo: Arc<dyn CarRepository>,
    ) -> Self {
        Self {
            maintenance_repo,
            car_repo,
        }
    }

    pub async fn list(
        &self,
        params: MaintenanceQueryParams,
    ) -> AppResult<PaginatedResponse<MaintenanceResponse>> {
        let (page, limit, offset) = normalize_pagination(params.page, params.limit);

        let records = self
            .maintenance_repo
            .list(params.car_id, limit, offset)
            .await?;
        let total = self.maintenance_repo.count_list(params.car_id).await?;

        Ok(PaginatedResponse::new(
            records.into_iter().map(map_record).collect(),
            total,
            page,
            limit,
        ))
    }

    pub async fn create(&self, request: CreateMaintenanceRequest) -> AppResult<MaintenanceResponse> {
        request.validate()?;

        if request.cost < Decimal::ZERO {
            return Err(AppError::validation_error("Cost cannot be negative"));
        }

        self.car_repo
            .find_by_id(request.car_id)
            .await?
            .ok_or_else(|| AppError::NotFound("car not found".to_string()))?;

        let record = MaintenanceRecord {
            id: Uuid::new_v4(),
            car_id: request.car_id,
            maintenance_type: request.maintenance_type,
            description: request.description,
            cost: request.cost,
            maintenance_date: request.maintenance_date,
            next_maintenance_date: request.next_maintenance_date,
            performed_by: request.performed_by,
        };

        let created = self.maintenance_repo.create(&record).await?;
        Ok(map_record(created))
    }
}

fn map_record(record: MaintenanceRecord) -> MaintenanceResponse {
    MaintenanceResponse {
        id: record.id,
        car_id: record.car_id,
        maintenance_type: record.maintenance_type,
        description: record.description,
        cost: record.cost,
        maintenance_date: record.maintenance_date,
        next_maintenance_date: record.next_maintenance_date,
        performed_by: record.performed_by,
    }
}
