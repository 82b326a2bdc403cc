use actix_web::{web, HttpResponse};

use crate::api::dtos::{CreateMaintenanceRequest, MaintenanceQueryParams};
use crate::api::routes::AppState;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/maintenance")
            .route("", web::get().to(list_records))
            .route("", web::post().to(create_record)),
    );
}

async fn list_records(
    state: web::Data<AppState>,
    query: web::Query<MaintenanceQueryParams>,
) -> AppResult<HttpResponse> {
    let result = state.maintenance_service.list(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn create_record(
    state: web::Data<AppState>,
    payload: web::Json<CreateMaintenanceRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .maintenance_service
        .create(payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(result))
}
