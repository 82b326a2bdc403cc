use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::api::dtos::{CreateOrderRequest, OrderQueryParams, UpdateOrderRequest};
use crate::api::routes::AppState;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/orders")
            .route("", web::get().to(list_orders))
            .route("", web::post().to(create_order))
            .route("/{id}", web::get().to(get_order))
            .route("/{id}", web::put().to(update_order))
            .route("/{id}", web::delete().to(delete_order)),
    );
}

async fn list_orders(
    state: web::Data<AppState>,
    query: web::Query<OrderQueryParams>,
) -> AppResult<HttpResponse> {
    let result = state.order_service.list(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn get_order(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let result = state.order_service.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn create_order(
    state: web::Data<AppState>,
    payload: web::Json<CreateOrderRequest>,
) -> AppResult<HttpResponse> {
    let result = state.order_service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(result))
}

async fn update_order(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateOrderRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .order_service
        .update(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn delete_order(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.order_service.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
