mod car_service;
mod client_service;
mod dashboard_service;
mod driver_service;
mod location_service;
mod maintenance_service;
mod message_service;
mod order_service;

pub use car_service::CarService;
pub use client_service::ClientService;
pub use dashboard_service::DashboardService;
pub use driver_service::DriverService;
pub use location_service::LocationService;
pub use maintenance_service::MaintenanceService;
pub use message_service::MessageService;
pub use order_service::OrderService;

/// Clamps raw pagination inputs the same way everywhere: pages start at 1,
/// page sizes stay within [1, 100].
pub(crate) fn normalize_pagination(page: Option<i64>, limit: Option<i64>) -> (i64, i64, i64) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(20).clamp(1, 100);
    let offset = (page - 1) * limit;
    (page, limit, offset)
}
