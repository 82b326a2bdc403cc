use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::api::dtos::{CarQueryParams, CreateCarRequest, NearestCarsQuery, UpdateCarRequest};
use crate::api::routes::AppState;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/cars")
            .route("", web::get().to(list_cars))
            .route("", web::post().to(create_car))
            // Registered ahead of /{id} so "nearest" is not parsed as an id.
            .route("/nearest", web::get().to(nearest_cars))
            .route("/{id}", web::get().to(get_car))
            .route("/{id}", web::put().to(update_car))
            .route("/{id}", web::delete().to(delete_car))
            .route("/{id}/like", web::post().to(like_car)),
    );
}

async fn list_cars(
    state: web::Data<AppState>,
    query: web::Query<CarQueryParams>,
) -> AppResult<HttpResponse> {
    let result = state.car_service.list(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/api/v1/cars/{id}",
    responses(
        (status = 200, description = "Car detail", body = crate::api::dtos::CarResponse),
        (status = 404, description = "Car not found", body = crate::api::dtos::ErrorResponse),
    ),
    tag = "cars"
)]
pub async fn get_car(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let result = state.car_service.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn create_car(
    state: web::Data<AppState>,
    payload: web::Json<CreateCarRequest>,
) -> AppResult<HttpResponse> {
    let result = state.car_service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(result))
}

async fn update_car(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateCarRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .car_service
        .update(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn delete_car(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    state.car_service.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn like_car(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let result = state.car_service.like(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/api/v1/cars/nearest",
    params(NearestCarsQuery),
    responses(
        (status = 200, description = "Available cars within the radius, nearest first", body = crate::api::dtos::NearestCarsResponse),
        (status = 404, description = "Reference location not found", body = crate::api::dtos::ErrorResponse),
    ),
    tag = "cars"
)]
pub async fn nearest_cars(
    state: web::Data<AppState>,
    query: web::Query<NearestCarsQuery>,
) -> AppResult<HttpResponse> {
    state.metrics.record_nearest_search();
    let result = state
        .car_service
        .nearest_available(query.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}
