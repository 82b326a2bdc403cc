use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{
    CarQueryParams, CarResponse, CreateCarRequest, LikeResponse, LocationResponse,
    NearbyCarResponse, NearestCarsQuery, NearestCarsResponse, PaginatedResponse, UpdateCarRequest,
};
use crate::domain::{Car, CarStatus, FuelType, Location, Transmission};
use crate::error::{AppError, AppResult};
use crate::geo;
use crate::infrastructure::repositories::{
    CarRepository, CarSearchParams, CarSort, LocationRepository,
};

use super::normalize_pagination;

#[derive(Clone)]
pub struct CarService {
    car_repo: Arc<dyn CarRepository>,
    location_repo: Arc<dyn LocationRepository>,
}

impl CarService {
    pub fn new(car_repo: Arc<dyn CarRepository>, location_repo: Arc<dyn LocationRepository>) -> Self {
        Self {
            car_repo,
            location_repo,
        }
    }

    pub async fn list(&self, params: CarQueryParams) -> AppResult<PaginatedResponse<CarResponse>> {
        let (page, limit, offset) = normalize_pagination(params.page, params.limit);

        let search = CarSearchParams {
            query: params.q,
            status: params.status.as_deref().map(parse_status).transpose()?,
            fuel_type: params.fuel_type.as_deref().map(parse_fuel_type).transpose()?,
            transmission: params
                .transmission
                .as_deref()
                .map(parse_transmission)
                .transpose()?,
            location_id: params.location_id,
            min_price: params.min_price,
            max_price: params.max_price,
            sort: params.sort.as_deref().map(parse_sort).transpose()?.unwrap_or_default(),
        };

        let rows = self.car_repo.search(&search, limit, offset).await?;
        let total = self.car_repo.count_search(&search).await?;
        let items = rows.into_iter().map(map_car).collect();

        Ok(PaginatedResponse::new(items, total, page, limit))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<CarResponse> {
        let car = self
            .car_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("car not found".to_string()))?;
        Ok(map_car(car))
    }

    pub async fn create(&self, request: CreateCarRequest) -> AppResult<CarResponse> {
        request.validate()?;

        if request.cost_per_day <= Decimal::ZERO {
            return Err(AppError::validation_error(
                "Daily cost must be greater than zero",
            ));
        }

        let now = Utc::now();
        let car = Car {
            id: Uuid::new_v4(),
            car_name: request.car_name,
            company_name: request.company_name,
            model_year: request.model_year,
            num_of_seats: request.num_of_seats,
            cost_per_day: request.cost_per_day,
            description: request.description,
            likes: 0,
            status: request
                .status
                .as_deref()
                .map(parse_status)
                .transpose()?
                .unwrap_or(CarStatus::Available),
            transmission: request
                .transmission
                .as_deref()
                .map(parse_transmission)
                .transpose()?
                .unwrap_or(Transmission::Manual),
            fuel_type: request
                .fuel_type
                .as_deref()
                .map(parse_fuel_type)
                .transpose()?
                .unwrap_or(FuelType::Petrol),
            mileage: request.mileage,
            location_id: request.location_id,
            license_plate: request.license_plate,
            created_at: now,
            updated_at: now,
        };

        let created = self.car_repo.create(&car).await?;
        info!(car_id = %created.id, name = %created.display_name(), "car added to fleet");
        Ok(map_car(created))
    }

    pub async fn update(&self, id: Uuid, request: UpdateCarRequest) -> AppResult<CarResponse> {
        request.validate()?;

        let mut existing = self
            .car_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("car not found".to_string()))?;

        if let Some(car_name) = request.car_name {
            existing.car_name = car_name;
        }
        if let Some(company_name) = request.company_name {
            existing.company_name = company_name;
        }
        if let Some(model_year) = request.model_year {
            existing.model_year = Some(model_year);
        }
        if let Some(num_of_seats) = request.num_of_seats {
            existing.num_of_seats = num_of_seats;
        }
        if let Some(cost_per_day) = request.cost_per_day {
            if cost_per_day <= Decimal::ZERO {
                return Err(AppError::validation_error(
                    "Daily cost must be greater than zero",
                ));
            }
            existing.cost_per_day = cost_per_day;
        }
        if let Some(description) = request.description {
            existing.description = description;
        }
        if let Some(status) = request.status {
            existing.status = parse_status(&status)?;
        }
        if let Some(transmission) = request.transmission {
            existing.transmission = parse_transmission(&transmission)?;
        }
        if let Some(fuel_type) = request.fuel_type {
            existing.fuel_type = parse_fuel_type(&fuel_type)?;
        }
        if let Some(mileage) = request.mileage {
            existing.mileage = Some(mileage);
        }
        if let Some(location_id) = request.location_id {
            existing.location_id = Some(location_id);
        }
        if let Some(license_plate) = request.license_plate {
            existing.license_plate = Some(license_plate);
        }
        existing.updated_at = Utc::now();

        let updated = self.car_repo.update(&existing).await?;
        Ok(map_car(updated))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.car_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("car not found".to_string()))?;

        info!(car_id = %id, "car removed from fleet");
        self.car_repo.delete(id).await
    }

    pub async fn like(&self, id: Uuid) -> AppResult<LikeResponse> {
        let likes = self.car_repo.increment_likes(id).await?;
        Ok(LikeResponse { id, likes })
    }

    /// Nearest-car search: resolves the reference location, loads every
    /// available car with its coordinates, and ranks them by great-circle
    /// distance. Cars without usable coordinates never appear.
    pub async fn nearest_available(
        &self,
        query: NearestCarsQuery,
    ) -> AppResult<NearestCarsResponse> {
        let radius_km = query.radius_km.unwrap_or(geo::DEFAULT_RADIUS_KM);
        if radius_km < 0.0 {
            return Err(AppError::validation_error(
                "Radius must be a non-negative number of kilometres",
            ));
        }

        let reference = self
            .location_repo
            .find_by_id(query.location_id)
            .await?
            .ok_or_else(|| AppError::NotFound("location not found".to_string()))?;

        let candidates = self.car_repo.find_available_with_locations().await?;
        let nearby = geo::find_nearby(&reference, candidates, radius_km);

        Ok(NearestCarsResponse {
            location: map_location(reference),
            radius_km,
            cars: nearby
                .into_iter()
                .map(|entry| NearbyCarResponse {
                    distance_km: entry.distance_km,
                    car: map_car(entry.candidate.car),
                })
                .collect(),
        })
    }
}

pub(crate) fn map_car(car: Car) -> CarResponse {
    let display_name = car.display_name();
    CarResponse {
        id: car.id,
        car_name: car.car_name,
        company_name: car.company_name,
        display_name,
        model_year: car.model_year,
        num_of_seats: car.num_of_seats,
        cost_per_day: car.cost_per_day,
        description: car.description,
        likes: car.likes,
        status: car.status,
        transmission: car.transmission,
        fuel_type: car.fuel_type,
        mileage: car.mileage,
        location_id: car.location_id,
        license_plate: car.license_plate,
        created_at: car.created_at,
        updated_at: car.updated_at,
    }
}

pub(crate) fn map_location(location: Location) -> LocationResponse {
    LocationResponse {
        id: location.id,
        city: location.city,
        state: location.state,
        country: location.country,
        latitude: location.latitude,
        longitude: location.longitude,
        zip_code: location.zip_code,
        created_at: location.created_at,
    }
}

fn parse_status(raw: &str) -> AppResult<CarStatus> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "available" => Ok(CarStatus::Available),
        "rented" => Ok(CarStatus::Rented),
        "maintenance" => Ok(CarStatus::Maintenance),
        "inactive" => Ok(CarStatus::Inactive),
        _ => Err(AppError::validation_error(
            "Status must be one of: available, rented, maintenance, inactive",
        )),
    }
}

fn parse_transmission(raw: &str) -> AppResult<Transmission> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "manual" => Ok(Transmission::Manual),
        "automatic" => Ok(Transmission::Automatic),
        _ => Err(AppError::validation_error(
            "Transmission must be one of: manual, automatic",
        )),
    }
}

fn parse_fuel_type(raw: &str) -> AppResult<FuelType> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "petrol" => Ok(FuelType::Petrol),
        "diesel" => Ok(FuelType::Diesel),
        "electric" => Ok(FuelType::Electric),
        "hybrid" => Ok(FuelType::Hybrid),
        _ => Err(AppError::validation_error(
            "Fuel type must be one of: petrol, diesel, electric, hybrid",
        )),
    }
}

fn parse_sort(raw: &str) -> AppResult<CarSort> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "newest" => Ok(CarSort::Newest),
        "popular" => Ok(CarSort::Popular),
        _ => Err(AppError::validation_error(
            "Sort must be one of: newest, popular",
        )),
    }
}
