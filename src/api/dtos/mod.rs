pub mod car_dto;
pub mod client_dto;
pub mod common;
pub mod dashboard_dto;
pub mod driver_dto;
pub mod location_dto;
pub mod maintenance_dto;
pub mod message_dto;
pub mod order_dto;

pub use car_dto::*;
pub use client_dto::*;
pub use common::*;
pub use dashboard_dto::*;
pub use driver_dto::*;
pub use location_dto::*;
pub use maintenance_dto::*;
pub use message_dto::*;
pub use order_dto::*;
