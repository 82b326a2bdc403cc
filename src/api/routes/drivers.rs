use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::api::dtos::{
    ApplicationQueryParams, CreateDriverRequest, DriverApplicationRequest, DriverQueryParams,
    RejectApplicationRequest, SalaryIncreaseRequest, UpdateDriverRequest,
};
use crate::api::routes::AppState;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/drivers")
            .route("", web::get().to(list_drivers))
            .route("", web::post().to(create_driver))
            .route("/salary-increase", web::post().to(increase_salaries))
            .route("/{id}", web::get().to(get_driver))
            .route("/{id}", web::put().to(update_driver))
            .route("/{id}", web::delete().to(delete_driver)),
    )
    .service(
        web::scope("/driver-applications")
            .route("", web::get().to(list_applications))
            .route("", web::post().to(apply))
            .route("/{id}/approve", web::post().to(approve_application))
            .route("/{id}/reject", web::post().to(reject_application)),
    );
}

async fn list_drivers(
    state: web::Data<AppState>,
    query: web::Query<DriverQueryParams>,
) -> AppResult<HttpResponse> {
    let result = state.driver_service.list(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn get_driver(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let result = state.driver_service.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn create_driver(
    state: web::Data<AppState>,
    payload: web::Json<CreateDriverRequest>,
) -> AppResult<HttpResponse> {
    let result = state.driver_service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(result))
}

async fn update_driver(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateDriverRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .driver_service
        .update(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn delete_driver(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.driver_service.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn increase_salaries(
    state: web::Data<AppState>,
    payload: web::Json<SalaryIncreaseRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .driver_service
        .increase_salaries(payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn list_applications(
    state: web::Data<AppState>,
    query: web::Query<ApplicationQueryParams>,
) -> AppResult<HttpResponse> {
    let result = state
        .driver_service
        .list_applications(query.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn apply(
    state: web::Data<AppState>,
    payload: web::Json<DriverApplicationRequest>,
) -> AppResult<HttpResponse> {
    let result = state.driver_service.apply(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(result))
}

async fn approve_application(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let result = state
        .driver_service
        .approve_application(path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn reject_application(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<RejectApplicationRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .driver_service
        .reject_application(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}
