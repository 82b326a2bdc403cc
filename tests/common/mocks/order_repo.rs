use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use car_rental_backend::domain::{CarStatus, ClientCategory, OrderStatus, RentalOrder};
use car_rental_backend::error::{AppError, AppResult};
use car_rental_backend::infrastructure::repositories::{
    GroupCount, OrderListParams, OrderRepository, OrderWithDetails,
};
use uuid::Uuid;

use super::{MockCarRepo, MockClientRepo, MockDriverRepo};

/// In-memory stand-in for the transactional order repository. The "all or
/// nothing" shape is preserved: the availability check happens before any
/// mutation, so a conflict leaves cars, clients, and orders untouched.
pub struct MockOrderRepo {
    pub orders: Mutex<Vec<RentalOrder>>,
    pub cars: Arc<MockCarRepo>,
    pub clients: Arc<MockClientRepo>,
    pub drivers: Arc<MockDriverRepo>,
}

impl MockOrderRepo {
    pub fn new(
        cars: Arc<MockCarRepo>,
        clients: Arc<MockClientRepo>,
        drivers: Arc<MockDriverRepo>,
    ) -> Self {
        Self {
            orders: Mutex::new(Vec::new()),
            cars,
            clients,
            drivers,
        }
    }

    pub fn push(&self, order: RentalOrder) {
        self.orders
            .lock()
            .expect("orders mutex poisoned")
            .push(order);
    }

    fn client_category(&self, client_id: Uuid) -> Option<ClientCategory> {
        self.clients
            .clients
            .lock()
            .expect("clients mutex poisoned")
            .iter()
            .find(|client| client.id == client_id)
            .map(|client| client.category)
    }

    fn matches(&self, order: &RentalOrder, params: &OrderListParams) -> bool {
        params.status.is_none_or(|status| order.status == status)
            && params
                .client_category
                .is_none_or(|category| self.client_category(order.client_id) == Some(category))
            && params
                .query
                .as_deref()
                .filter(|q| !q.trim().is_empty())
                .is_none_or(|q| {
                    order
                        .reference
                        .to_lowercase()
                        .contains(&q.trim().to_lowercase())
                })
    }
}

#[async_trait]
impl OrderRepository for MockOrderRepo {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<RentalOrder>> {
        Ok(self
            .orders
            .lock()
            .expect("orders mutex poisoned")
            .iter()
            .find(|order| order.id == id)
            .cloned())
    }

    async fn list(
        &self,
        params: &OrderListParams,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<OrderWithDetails>> {
        let orders: Vec<RentalOrder> = self
            .orders
            .lock()
            .expect("orders mutex poisoned")
            .iter()
            .filter(|order| self.matches(order, params))
            .cloned()
            .collect();

        let cars = self.cars.cars.lock().expect("cars mutex poisoned").clone();
        let clients = self
            .clients
            .clients
            .lock()
            .expect("clients mutex poisoned")
            .clone();
        let drivers = self
            .drivers
            .drivers
            .lock()
            .expect("drivers mutex poisoned")
            .clone();

        let start = offset.max(0) as usize;
        let limit = limit.max(0) as usize;
        Ok(orders
            .into_iter()
            .skip(start)
            .take(limit)
            .map(|order| {
                let car_name = cars
                    .iter()
                    .find(|car| car.id == order.car_id)
                    .map(|car| car.car_name.clone())
                    .unwrap_or_default();
                let client_name = clients
                    .iter()
                    .find(|client| client.id == order.client_id)
                    .map(|client| client.full_name())
                    .unwrap_or_default();
                let driver_name = order.driver_id.and_then(|driver_id| {
                    drivers
                        .iter()
                        .find(|driver| driver.id == driver_id)
                        .map(|driver| driver.name.clone())
                });
                OrderWithDetails {
                    order,
                    car_name,
                    client_name,
                    driver_name,
                }
            })
            .collect())
    }

    async fn count_list(&self, params: &OrderListParams) -> AppResult<i64> {
        Ok(self
            .orders
            .lock()
            .expect("orders mutex poisoned")
            .iter()
            .filter(|order| self.matches(order, params))
            .count() as i64)
    }

    async fn create_rental(&self, order: &RentalOrder) -> AppResult<RentalOrder> {
        if self.client_category(order.client_id).is_none() {
            return Err(AppError::NotFound("client not found".to_string()));
        }

        {
            let mut cars = self.cars.cars.lock().expect("cars mutex poisoned");
            let car = cars
                .iter_mut()
                .find(|car| car.id == order.car_id)
                .filter(|car| car.status == CarStatus::Available)
                .ok_or_else(|| {
                    AppError::Conflict("car is not available for rent".to_string())
                })?;
            car.status = CarStatus::Rented;
        }

        {
            let mut clients = self.clients.clients.lock().expect("clients mutex poisoned");
            let client = clients
                .iter_mut()
                .find(|client| client.id == order.client_id)
                .ok_or_else(|| AppError::NotFound("client not found".to_string()))?;
            client.total_bookings += 1;
            client.category = ClientCategory::from_total_bookings(client.total_bookings);
        }

        self.push(order.clone());
        Ok(order.clone())
    }

    async fn update(&self, order: &RentalOrder) -> AppResult<RentalOrder> {
        let mut rows = self.orders.lock().expect("orders mutex poisoned");
        if let Some(existing) = rows.iter_mut().find(|existing| existing.id == order.id) {
            *existing = order.clone();
            Ok(order.clone())
        } else {
            Err(AppError::NotFound("order not found".to_string()))
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.orders
            .lock()
            .expect("orders mutex poisoned")
            .retain(|order| order.id != id);
        Ok(())
    }

    async fn count_all(&self) -> AppResult<i64> {
        Ok(self.orders.lock().expect("orders mutex poisoned").len() as i64)
    }

    async fn count_by_status(&self, status: OrderStatus) -> AppResult<i64> {
        Ok(self
            .orders
            .lock()
            .expect("orders mutex poisoned")
            .iter()
            .filter(|order| order.status == status)
            .count() as i64)
    }

    async fn status_breakdown(&self) -> AppResult<Vec<GroupCount>> {
        let mut counts: HashMap<String, i64> = HashMap::new();
        for order in self.orders.lock().expect("orders mutex poisoned").iter() {
            let label = serde_json::to_value(order.status)
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
}
