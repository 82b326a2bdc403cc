#![allow(dead_code)]

use std::sync::Arc;

use car_rental_backend::api::routes::AppState;
use car_rental_backend::application::{
    CarService, ClientService, DashboardService, DriverService, LocationService,
    MaintenanceService, MessageService, OrderService,
};
use car_rental_backend::config::SecurityConfig;
use car_rental_backend::observability::AppMetrics;

pub mod fixtures;
pub mod mocks;

use mocks::{
    MockCarRepo, MockClientRepo, MockDriverRepo, MockLocationRepo, MockMaintenanceRepo,
    MockMessageRepo, MockOrderRepo,
};

pub fn security_config() -> SecurityConfig {
    SecurityConfig {
        cors_allowed_origins: vec!["http://localhost:3000".to_string()],
        metrics_allow_private_only: true,
        metrics_admin_token: None,
    }
}

/// All the in-memory repositories behind one `AppState`, wired the same way
/// `main.rs` wires the Postgres implementations.
pub struct TestHarness {
    pub locations: Arc<MockLocationRepo>,
    pub cars: Arc<MockCarRepo>,
    pub clients: Arc<MockClientRepo>,
    pub drivers: Arc<MockDriverRepo>,
    pub orders: Arc<MockOrderRepo>,
    pub messages: Arc<MockMessageRepo>,
    pub maintenance: Arc<MockMaintenanceRepo>,
}

impl TestHarness {
    pub fn new() -> Self {
        let locations = Arc::new(MockLocationRepo::default());
        let cars = Arc::new(MockCarRepo::new(locations.clone()));
        let clients = Arc::new(MockClientRepo::default());
        let drivers = Arc::new(MockDriverRepo::default());
        let orders = Arc::new(MockOrderRepo::new(
            cars.clone(),
            clients.clone(),
            drivers.clone(),
        ));
        let messages = Arc::new(MockMessageRepo::default());
        let maintenance = Arc::new(MockMaintenanceRepo::default());

        Self {
            locations,
            cars,
            clients,
            drivers,
            orders,
            messages,
            maintenance,
        }
    }

    pub fn car_service(&self) -> CarService {
        CarService::new(self.cars.clone(), self.locations.clone())
    }

    pub fn location_service(&self) -> LocationService {
        LocationService::new(
            self.locations.clone(),
            self.cars.clone(),
            self.clients.clone(),
            self.drivers.clone(),
        )
    }

    pub fn client_service(&self) -> ClientService {
        ClientService::new(self.clients.clone())
    }

    pub fn driver_service(&self) -> DriverService {
        DriverService::new(self.drivers.clone())
    }

    pub fn order_service(&self) -> OrderService {
        OrderService::new(self.orders.clone())
    }

    pub fn message_service(&self) -> MessageService {
        MessageService::new(self.messages.clone())
    }

    pub fn maintenance_service(&self) -> MaintenanceService {
        MaintenanceService::new(self.maintenance.clone(), self.cars.clone())
    }

    pub fn dashboard_service(&self) -> DashboardService {
        DashboardService::new(
            self.cars.clone(),
            self.drivers.clone(),
            self.clients.clone(),
            self.orders.clone(),
            self.locations.clone(),
        )
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            car_service: Arc::new(self.car_service()),
            location_service: Arc::new(self.location_service()),
            client_service: Arc::new(self.client_service()),
            driver_service: Arc::new(self.driver_service()),
            order_service: Arc::new(self.order_service()),
            message_service: Arc::new(self.message_service()),
            maintenance_service: Arc::new(self.maintenance_service()),
            dashboard_service: Arc::new(self.dashboard_service()),
            security: security_config(),
            app_environment: "test".to_string(),
            metrics: Arc::new(AppMetrics::default()),
            db_pool: None,
        }
    }
}

pub fn get_items_array(body: &serde_json::Value) -> Vec<serde_json::Value> {
    body.get("items")
        .and_then(serde_json::Value::as_array)
        .cloned()
        .unwrap_or_default()
}

pub fn get_total(body: &serde_json::Value) -> i64 {
    body.get("total")
        .and_then(serde_json::Value::as_i64)
        .unwrap_or(0)
}
