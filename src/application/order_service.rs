use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::{
    CreateOrderRequest, GroupCountResponse, OrderListResponse, OrderQueryParams, OrderResponse,
    OrderRow, UpdateOrderRequest,
};
use crate::domain::{OrderStatus, RentalOrder};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::{OrderListParams, OrderRepository};

use super::client_service::parse_category;
use super::normalize_pagination;

#[derive(Clone)]
pub struct OrderService {
    order_repo: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(order_repo: Arc<dyn OrderRepository>) -> Self {
        Self { order_repo }
    }

    pub async fn list(&self, params: OrderQueryParams) -> AppResult<OrderListResponse> {
        let (page, limit, offset) = normalize_pagination(params.page, params.limit);

        let list_params = OrderListParams {
            status: params.status.as_deref().map(parse_status).transpose()?,
            client_category: params
                .client_category
                .as_deref()
                .map(parse_category)
                .transpose()?,
            query: params.q,
        };

        let rows = self.order_repo.list(&list_params, limit, offset).await?;
        let total = self.order_repo.count_list(&list_params).await?;
        let stats = self
            .order_repo
            .status_breakdown()
            .await?
            .into_iter()
            .map(|row| GroupCountResponse {
                label: row.label,
                count: row.count,
            })
            .collect();

        Ok(OrderListResponse {
            orders: rows
                .into_iter()
                .map(|row| OrderRow {
                    order: map_order(row.order),
                    car_name: row.car_name,
                    client_name: row.client_name,
                    driver_name: row.driver_name,
                })
                .collect(),
            total,
            page,
            limit,
            stats,
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<OrderResponse> {
        let order = self
            .order_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("order not found".to_string()))?;
        Ok(map_order(order))
    }

    /// Books a car. The availability check, the car status flip, the order
    /// insert, and the client booking tally all land in one transaction
    /// (see `OrderRepository::create_rental`) so a half-applied booking can
    /// never be observed.
    pub async fn create(&self, request: CreateOrderRequest) -> AppResult<OrderResponse> {
        request.validate()?;

        let now = Utc::now();
        let order = RentalOrder {
            id: Uuid::new_v4(),
            reference: RentalOrder::new_reference(),
            car_id: request.car_id,
            client_id: request.client_id,
            driver_id: request.driver_id,
            start_date: request.start_date,
            end_date: request.end_date,
            pickup_location_id: request.pickup_location_id,
            dropoff_location_id: request.dropoff_location_id,
            total_amount: request.total_amount,
            status: OrderStatus::Pending,
            special_requirements: request.special_requirements,
            created_at: now,
            updated_at: now,
        };

        order.validate_window()?;

        let created = self.order_repo.create_rental(&order).await?;
        info!(
            order_id = %created.id,
            reference = %created.reference,
            car_id = %created.car_id,
            "rental order created"
        );
        Ok(map_order(created))
    }

    pub async fn update(&self, id: Uuid, request: UpdateOrderRequest) -> AppResult<OrderResponse> {
        request.validate()?;

        let mut existing = self
            .order_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("order not found".to_string()))?;

        if let Some(driver_id) = request.driver_id {
            existing.driver_id = Some(driver_id);
        }
        if let Some(start_date) = request.start_date {
            existing.start_date = start_date;
        }
        if let Some(end_date) = request.end_date {
            existing.end_date = end_date;
        }
        if let Some(pickup_location_id) = request.pickup_location_id {
            existing.pickup_location_id = Some(pickup_location_id);
        }
        if let Some(dropoff_location_id) = request.dropoff_location_id {
            existing.dropoff_location_id = Some(dropoff_location_id);
        }
        if let Some(total_amount) = request.total_amount {
            existing.total_amount = total_amount;
        }
        if let Some(status) = request.status {
            existing.status = parse_status(&status)?;
        }
        if let Some(special_requirements) = request.special_requirements {
            existing.special_requirements = Some(special_requirements);
        }
        existing.updated_at = Utc::now();

        existing.validate_window()?;

        let updated = self.order_repo.update(&existing).await?;
        Ok(map_order(updated))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.order_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("order not found".to_string()))?;
        self.order_repo.delete(id).await
    }
}

fn map_order(order: RentalOrder) -> OrderResponse {
    OrderResponse {
        id: order.id,
        reference: order.reference,
        car_id: order.car_id,
        client_id: order.client_id,
        driver_id: order.driver_id,
        start_date: order.start_date,
        end_date: order.end_date,
        pickup_location_id: order.pickup_location_id,
        dropoff_location_id: order.dropoff_location_id,
        total_amount: order.total_amount,
        status: order.status,
        special_requirements: order.special_requirements,
        created_at: order.created_at,
        updated_at: order.updated_at,
    }
}

fn parse_status(raw: &str) -> AppResult<OrderStatus> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "pending" => Ok(OrderStatus::Pending),
        "confirmed" => Ok(OrderStatus::Confirmed),
        "ongoing" => Ok(OrderStatus::Ongoing),
        "completed" => Ok(OrderStatus::Completed),
        "cancelled" => Ok(OrderStatus::Cancelled),
        _ => Err(AppError::validation_error(
            "Status must be one of: pending, confirmed, ongoing, completed, cancelled",
        )),
    }
}
