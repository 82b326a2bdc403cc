use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use car_rental_backend::domain::{Car, CarStatus};
use car_rental_backend::error::{AppError, AppResult};
use car_rental_backend::infrastructure::repositories::{
    CarRepository, CarSearchParams, CarSort, CarWithLocation, GroupCount,
};
use uuid::Uuid;

use super::MockLocationRepo;

pub struct MockCarRepo {
    pub cars: Mutex<Vec<Car>>,
    pub locations: Arc<MockLocationRepo>,
}

impl MockCarRepo {
    pub fn new(locations: Arc<MockLocationRepo>) -> Self {
        Self {
            cars: Mutex::new(Vec::new()),
            locations,
        }
    }

    pub fn push(&self, car: Car) {
        self.cars.lock().expect("cars mutex poisoned").push(car);
    }

    fn matches(car: &Car, params: &CarSearchParams) -> bool {
        let query_ok = params
            .query
            .as_deref()
            .filter(|q| !q.trim().is_empty())
            .is_none_or(|q| {
                let needle = q.trim().to_lowercase();
                car.car_name.to_lowercase().contains(&needle)
                    || car.company_name.to_lowercase().contains(&needle)
                    || car
                        .license_plate
                        .as_deref()
                        .is_some_and(|plate| plate.to_lowercase().contains(&needle))
            });

        query_ok
            && params.status.is_none_or(|status| car.status == status)
            && params
                .fuel_type
                .is_none_or(|fuel_type| car.fuel_type == fuel_type)
            && params
                .transmission
                .is_none_or(|transmission| car.transmission == transmission)
            && params
                .location_id
                .is_none_or(|location_id| car.location_id == Some(location_id))
            && params.min_price.is_none_or(|min| car.cost_per_day >= min)
            && params.max_price.is_none_or(|max| car.cost_per_day <= max)
    }
}

#[async_trait]
impl CarRepository for MockCarRepo {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Car>> {
        Ok(self
            .cars
            .lock()
            .expect("cars mutex poisoned")
            .iter()
            .find(|car| car.id == id)
            .cloned())
    }

    async fn search(
        &self,
        params: &CarSearchParams,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Car>> {
        let mut rows: Vec<Car> = self
            .cars
            .lock()
            .expect("cars mutex poisoned")
            .iter()
            .filter(|car| Self::matches(car, params))
            .cloned()
            .collect();

        match params.sort {
            CarSort::Newest => rows.sort_by(|left, right| right.created_at.cmp(&left.created_at)),
            CarSort::Popular => rows.sort_by(|left, right| right.likes.cmp(&left.likes)),
        }

        let start = offset.max(0) as usize;
        let limit = limit.max(0) as usize;
        Ok(rows.into_iter().skip(start).take(limit).collect())
    }

    async fn count_search(&self, params: &CarSearchParams) -> AppResult<i64> {
        Ok(self
            .cars
            .lock()
            .expect("cars mutex poisoned")
            .iter()
            .filter(|car| Self::matches(car, params))
            .count() as i64)
    }

    async fn create(&self, car: &Car) -> AppResult<Car> {
        self.push(car.clone());
        Ok(car.clone())
    }

    async fn update(&self, car: &Car) -> AppResult<Car> {
        let mut rows = self.cars.lock().expect("cars mutex poisoned");
        if let Some(existing) = rows.iter_mut().find(|existing| existing.id == car.id) {
            *existing = car.clone();
            Ok(car.clone())
        } else {
            Err(AppError::NotFound("car not found".to_string()))
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.cars
            .lock()
            .expect("cars mutex poisoned")
            .retain(|car| car.id != id);
        Ok(())
    }

    async fn increment_likes(&self, id: Uuid) -> AppResult<i32> {
        let mut rows = self.cars.lock().expect("cars mutex poisoned");
        let car = rows
            .iter_mut()
            .find(|car| car.id == id)
            .ok_or_else(|| AppError::NotFound("car not found".to_string()))?;
        car.likes += 1;
        Ok(car.likes)
    }

    async fn find_available_with_locations(&self) -> AppResult<Vec<CarWithLocation>> {
        let locations = self
            .locations
            .locations
            .lock()
            .expect("locations mutex poisoned")
            .clone();

        Ok(self
            .cars
            .lock()
            .expect("cars mutex poisoned")
            .iter()
            .filter(|car| car.status == CarStatus::Available)
            .map(|car| {
                let location = car
                    .location_id
                    .and_then(|id| locations.iter().find(|location| location.id == id));
                CarWithLocation {
                    car: car.clone(),
                    latitude: location.and_then(|location| location.latitude),
                    longitude: location.and_then(|location| location.longitude),
                }
            })
            .collect())
    }

    async fn count_all(&self) -> AppResult<i64> {
        Ok(self.cars.lock().expect("cars mutex poisoned").len() as i64)
    }

    async fn count_by_status(&self, status: CarStatus) -> AppResult<i64> {
        Ok(self
            .cars
            .lock()
            .expect("cars mutex poisoned")
            .iter()
            .filter(|car| car.status == status)
            .count() as i64)
    }

    async fn count_by_location(&self, location_id: Uuid) -> AppResult<i64> {
        Ok(self
            .cars
            .lock()
            .expect("cars mutex poisoned")
            .iter()
            .filter(|car| car.location_id == Some(location_id))
            .count() as i64)
    }

    async fn status_breakdown(&self) -> AppResult<Vec<GroupCount>> {
        let mut counts: HashMap<String, i64> = HashMap::new();
        for car in self.cars.lock().expect("cars mutex poisoned").iter() {
            let label = serde_json::to_value(car.status)
                .expect("status should serialize")
                .as_str()
                .expect("status serializes to a string")
                .to_string();
            *counts.entry(label).or_insert(0) += 1;
        }
        let mut rows: Vec<GroupCount> = counts
            .into_iter()
            .map(|(label, count)| GroupCount { label, count })
            .collect();
        rows.sort_by(|left, right| right.count.cmp(&left.count));
        Ok(rows)
    }

    async fn top_companies(&self, limit: i64) -> AppResult<Vec<GroupCount>> {
        let mut counts: HashMap<String, i64> = HashMap::new();
        for car in self.cars.lock().expect("cars mutex poisoned").iter() {
            *counts.entry(car.company_name.clone()).or_insert(0) += 1;
        }
        let mut rows: Vec<GroupCount> = counts
            .into_iter()
            .map(|(label, count)| GroupCount { label, count })
            .collect();
        rows.sort_by(|left, right| right.count.cmp(&left.count));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }
}
