use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::api::dtos::CreateLocationRequest;
use crate::api::routes::AppState;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/locations")
            .route("", web::get().to(list_locations))
            .route("", web::post().to(create_location))
            .route("/{id}", web::get().to(get_location)),
    );
}

async fn list_locations(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let result = state.location_service.list().await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn get_location(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let result = state.location_service.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn create_location(
    state: web::Data<AppState>,
    payload: web::Json<CreateLocationRequest>,
) -> AppResult<HttpResponse> {
    let result = state.location_service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(result))
}
