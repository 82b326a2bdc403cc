use std::sync::Arc;

use crate::api::dtos::{AnalyticsResponse, DashboardResponse, GroupCountResponse};
use crate::domain::{CarStatus, DriverStatus, OrderStatus};
use crate::error::AppResult;
use crate::infrastructure::repositories::{
    CarRepository, ClientRepository, DriverRepository, GroupCount, LocationRepository,
    OrderRepository,
};

const TOP_COMPANY_LIMIT: i64 = 5;

#[derive(Clone)]
pub struct DashboardService {
    car_repo: Arc<dyn CarRepository>,
    driver_repo: Arc<dyn DriverRepository>,
    client_repo: Arc<dyn ClientRepository>,
    order_repo: Arc<dyn OrderRepository>,
    location_repo: Arc<dyn LocationRepository>,
}

impl DashboardService {
    pub fn new(
        car_repo: Arc<dyn CarRepository>,
        driver_repo: Arc<dyn DriverRepository>,
        client_repo: Arc<dyn ClientRepository>,
        order_repo: Arc<dyn OrderRepository>,
        location_repo: Arc<dyn LocationRepository>,
    ) -> Self {
        Self {
            car_repo,
            driver_repo,
            client_repo,
            order_repo,
            location_repo,
        }
    }

    pub async fn dashboard(&self) -> AppResult<DashboardResponse> {
        Ok(DashboardResponse {
            total_cars: self.car_repo.count_all().await?,
            available_cars: self.car_repo.count_by_status(CarStatus::Available).await?,
            total_drivers: self.driver_repo.count_all().await?,
            active_drivers: self
                .driver_repo
                .count_by_status(DriverStatus::Active)
                .await?,
            total_clients: self.client_repo.count_all().await?,
            total_orders: self.order_repo.count_all().await?,
            pending_orders: self
                .order_repo
                .count_by_status(OrderStatus::Pending)
                .await?,
            total_locations: self.location_repo.count_all().await?,
            pending_applications: self
                .driver_repo
                .count_applications(Some(crate::domain::ApplicationStatus::Pending))
                .await?,
        })
    }

    pub async fn analytics(&self) -> AppResult<AnalyticsResponse> {
        Ok(AnalyticsResponse {
            cars_by_status: map_groups(self.car_repo.status_breakdown().await?),
            cars_by_company: map_groups(self.car_repo.top_companies(TOP_COMPANY_LIMIT).await?),
            clients_by_category: map_groups(self.client_repo.category_breakdown().await?),
            orders_by_status: map_groups(self.order_repo.status_breakdown().await?),
            drivers_by_status: map_groups(self.driver_repo.status_breakdown().await?),
        })
    }
}

fn map_groups(rows: Vec<GroupCount>) -> Vec<GroupCountResponse> {
    rows.into_iter()
        .map(|row| GroupCountResponse {
            label: row.label,
            count: row.count,
        })
        .collect()
}
