pub mod car;
pub mod client;
pub mod driver;
pub mod errors;
pub mod location;
pub mod maintenance;
pub mod message;
pub mod order;

pub use car::{Car, CarStatus, FuelType, Transmission};
pub use client::{Client, ClientCategory};
pub use driver::{ApplicationStatus, Driver, DriverApplication, DriverStatus};
pub use errors::DomainError;
pub use location::Location;
pub use maintenance::MaintenanceRecord;
pub use message::{Message, MessageType};
pub use order::{OrderStatus, RentalOrder};
