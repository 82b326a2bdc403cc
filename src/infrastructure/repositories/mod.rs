pub mod car_repository;
pub mod client_repository;
pub mod driver_repository;
pub mod location_repository;
pub mod maintenance_repository;
pub mod message_repository;
pub mod order_repository;
pub mod traits;

pub use car_repository::CarRepositoryImpl;
pub use client_repository::ClientRepositoryImpl;
pub use driver_repository::DriverRepositoryImpl;
pub use location_repository::LocationRepositoryImpl;
pub use maintenance_repository::MaintenanceRepositoryImpl;
pub use message_repository::MessageRepositoryImpl;
pub use order_repository::OrderRepositoryImpl;
pub use traits::{
    CarRepository, CarSearchParams, CarSort, CarWithLocation, ClientListParams, ClientRepository,
    DriverListParams, DriverRepository, GroupCount, LocationRepository, MaintenanceRepository,
    MessageListParams, MessageRepository, OrderListParams, OrderRepository, OrderWithDetails,
};
