use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{
    ApplicationStatus, Car, CarStatus, Client, ClientCategory, Driver, DriverApplication,
    DriverStatus, FuelType, Location, MaintenanceRecord, Message, MessageType, RentalOrder,
    Transmission,
};
use crate::error::AppResult;
use crate::geo::Positioned;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarSort {
    #[default]
    Newest,
    Popular,
}

#[derive(Debug, Clone, Default)]
pub struct CarSearchParams {
    pub query: Option<String>,
    pub status: Option<CarStatus>,
    pub fuel_type: Option<FuelType>,
    pub transmission: Option<Transmission>,
    pub location_id: Option<Uuid>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort: CarSort,
}

/// An available car joined with its (possibly deleted) location. The
/// relation is weak: a car whose location row is gone simply carries no
/// coordinates and can never match a proximity search.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CarWithLocation {
    #[sqlx(flatten)]
    pub car: Car,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Positioned for CarWithLocation {
    fn position(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

/// Aggregate row for analytics breakdowns (`GROUP BY` on an enum column).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GroupCount {
    pub label: String,
    pub count: i64,
}

#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Car>>;
    async fn search(
        &self,
        params: &CarSearchParams,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Car>>;
    async fn count_search(&self, params: &CarSearchParams) -> AppResult<i64>;
    async fn create(&self, car: &Car) -> AppResult<Car>;
    async fn update(&self, car: &Car) -> AppResult<Car>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
    /// Single-statement increment so concurrent likes never lose updates.
    async fn increment_likes(&self, id: Uuid) -> AppResult<i32>;
    /// Candidate set for the nearest-car scan: every available car with its
    /// location coordinates (when the location still exists).
    async fn find_available_with_locations(&self) -> AppResult<Vec<CarWithLocation>>;
    async fn count_all(&self) -> AppResult<i64>;
    async fn count_by_status(&self, status: CarStatus) -> AppResult<i64>;
    async fn count_by_location(&self, location_id: Uuid) -> AppResult<i64>;
    async fn status_breakdown(&self) -> AppResult<Vec<GroupCount>>;
    async fn top_companies(&self, limit: i64) -> AppResult<Vec<GroupCount>>;
}

#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Location>>;
    async fn find_all(&self) -> AppResult<Vec<Location>>;
    async fn create(&self, location: &Location) -> AppResult<Location>;
    async fn count_all(&self) -> AppResult<i64>;
}

#[derive(Debug, Clone, Default)]
pub struct ClientListParams {
    pub category: Option<ClientCategory>,
    pub query: Option<String>,
}

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Client>>;
    async fn list(
        &self,
        params: &ClientListParams,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Client>>;
    async fn count_list(&self, params: &ClientListParams) -> AppResult<i64>;
    async fn create(&self, client: &Client) -> AppResult<Client>;
    async fn update(&self, client: &Client) -> AppResult<Client>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
    async fn count_all(&self) -> AppResult<i64>;
    async fn count_by_location(&self, location_id: Uuid) -> AppResult<i64>;
    async fn category_breakdown(&self) -> AppResult<Vec<GroupCount>>;
}

#[derive(Debug, Clone, Default)]
pub struct DriverListParams {
    pub status: Option<DriverStatus>,
    pub query: Option<String>,
}

#[async_trait]
pub trait DriverRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Driver>>;
    async fn list(
        &self,
        params: &DriverListParams,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Driver>>;
    async fn count_list(&self, params: &DriverListParams) -> AppResult<i64>;
    async fn create(&self, driver: &Driver) -> AppResult<Driver>;
    async fn update(&self, driver: &Driver) -> AppResult<Driver>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
    async fn count_all(&self) -> AppResult<i64>;
    async fn count_by_status(&self, status: DriverStatus) -> AppResult<i64>;
    async fn count_by_location(&self, location_id: Uuid) -> AppResult<i64>;
    async fn status_breakdown(&self) -> AppResult<Vec<GroupCount>>;
    async fn average_salary(&self) -> AppResult<Option<Decimal>>;
    /// Applies the same percentage raise to every listed driver in one
    /// statement; returns the number of rows touched.
    async fn increase_salaries(&self, driver_ids: &[Uuid], percentage: Decimal) -> AppResult<u64>;

    async fn create_application(
        &self,
        application: &DriverApplication,
    ) -> AppResult<DriverApplication>;
    async fn find_application(&self, id: Uuid) -> AppResult<Option<DriverApplication>>;
    async fn list_applications(
        &self,
        status: Option<ApplicationStatus>,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<DriverApplication>>;
    async fn count_applications(&self, status: Option<ApplicationStatus>) -> AppResult<i64>;
    /// Inserts a driver from the application and marks the application
    /// approved inside one transaction; either both apply or neither.
    async fn approve_application(&self, id: Uuid, starting_salary: Decimal) -> AppResult<Driver>;
    async fn reject_application(
        &self,
        id: Uuid,
        notes: Option<String>,
    ) -> AppResult<DriverApplication>;
}

#[derive(Debug, Clone, Default)]
pub struct OrderListParams {
    pub status: Option<crate::domain::OrderStatus>,
    pub client_category: Option<ClientCategory>,
    pub query: Option<String>,
}

/// An order joined with the display names of its related records.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrderWithDetails {
    #[sqlx(flatten)]
    pub order: RentalOrder,
    pub car_name: String,
    pub client_name: String,
    pub driver_name: Option<String>,
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<RentalOrder>>;
    async fn list(
        &self,
        params: &OrderListParams,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<OrderWithDetails>>;
    async fn count_list(&self, params: &OrderListParams) -> AppResult<i64>;
    /// The one read-modify-write in the system: reserves the car, inserts
    /// the order, and bumps the client's booking tally and category inside
    /// a single transaction.
    async fn create_rental(&self, order: &RentalOrder) -> AppResult<RentalOrder>;
    async fn update(&self, order: &RentalOrder) -> AppResult<RentalOrder>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
    async fn count_all(&self) -> AppResult<i64>;
    async fn count_by_status(&self, status: crate::domain::OrderStatus) -> AppResult<i64>;
    async fn status_breakdown(&self) -> AppResult<Vec<GroupCount>>;
}

#[derive(Debug, Clone, Default)]
pub struct MessageListParams {
    pub message_type: Option<MessageType>,
    pub query: Option<String>,
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Message>>;
    async fn list(
        &self,
        params: &MessageListParams,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Message>>;
    async fn count_list(&self, params: &MessageListParams) -> AppResult<i64>;
    async fn create(&self, message: &Message) -> AppResult<Message>;
    async fn mark_read(&self, id: Uuid) -> AppResult<Message>;
    async fn respond(&self, id: Uuid, response: &str) -> AppResult<Message>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

#[async_trait]
pub trait MaintenanceRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<MaintenanceRecord>>;
    async fn list(
        &self,
        car_id: Option<Uuid>,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<MaintenanceRecord>>;
    async fn count_list(&self, car_id: Option<Uuid>) -> AppResult<i64>;
    async fn create(&self, record: &MaintenanceRecord) -> AppResult<MaintenanceRecord>;
}
