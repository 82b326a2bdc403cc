use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{CreateLocationRequest, LocationResponse, LocationSummaryResponse};
use crate::domain::Location;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::{
    CarRepository, ClientRepository, DriverRepository, LocationRepository,
};

use super::car_service::map_location;

#[derive(Clone)]
pub struct LocationService {
    location_repo: Arc<dyn LocationRepository>,
    car_repo: Arc<dyn CarRepository>,
    client_repo: Arc<dyn ClientRepository>,
    driver_repo: Arc<dyn DriverRepository>,
}

impl LocationService {
    pub fn new(
        location_repo: Arc<dyn LocationRepository>,
        car_repo: Arc<dyn CarRepository>,
        client_repo: Arc<dyn ClientRepository>,
        driver_repo: Arc<dyn DriverRepository>,
    ) -> Self {
        Self {
            location_repo,
            car_repo,
            client_repo,
            driver_repo,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<LocationSummaryResponse>> {
        let locations = self.location_repo.find_all().await?;

        let mut summaries = Vec::with_capacity(locations.len());
        for location in locations {
            let car_count = self.car_repo.count_by_location(location.id).await?;
            let client_count = self.client_repo.count_by_location(location.id).await?;
            let driver_count = self.driver_repo.count_by_location(location.id).await?;
            summaries.push(LocationSummaryResponse {
                location: map_location(location),
                car_count,
                client_count,
                driver_count,
            });
        }

        Ok(summaries)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<LocationResponse> {
        let location = self
            .location_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("location not found".to_string()))?;
        Ok(map_location(location))
    }

    pub async fn create(&self, request: CreateLocationRequest) -> AppResult<LocationResponse> {
        request.validate()?;

        let location = Location {
            id: Uuid::new_v4(),
            city: request.city,
            state: request.state,
            country: request.country.unwrap_or_else(|| "Bangladesh".to_string()),
            latitude: request.latitude,
            longitude: request.longitude,
            zip_code: request.zip_code,
            created_at: Utc::now(),
        };

        let created = self.location_repo.create(&location).await?;
        Ok(map_location(created))
    }
}
