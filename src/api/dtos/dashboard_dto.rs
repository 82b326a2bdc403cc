use serde::Serialize;

use super::common::GroupCountResponse;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_cars: i64,
    pub available_cars: i64,
    pub total_drivers: i64,
    pub active_drivers: i64,
    pub total_clients: i64,
    pub total_orders: i64,
    pub pending_orders: i64,
    pub total_locations: i64,
    pub pending_applications: i64,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub cars_by_status: Vec<GroupCountResponse>,
    pub cars_by_company: Vec<GroupCountResponse>,
    pub clients_by_category: Vec<GroupCountResponse>,
    pub orders_by_status: Vec<GroupCountResponse>,
    pub drivers_by_status: Vec<GroupCountResponse>,
}
