use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::api::dtos::{ClientQueryParams, CreateClientRequest, UpdateClientRequest};
use crate::api::routes::AppState;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/clients")
            .route("", web::get().to(list_clients))
            .route("", web::post().to(create_client))
            .route("/{id}", web::get().to(get_client))
            .route("/{id}", web::put().to(update_client))
            .route("/{id}", web::delete().to(delete_client)),
    );
}

async fn list_clients(
    state: web::Data<AppState>,
    query: web::Query<ClientQueryParams>,
) -> AppResult<HttpResponse> {
    let result = state.client_service.list(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn get_client(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let result = state.client_service.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn create_client(
    state: web::Data<AppState>,
    payload: web::Json<CreateClientRequest>,
) -> AppResult<HttpResponse> {
    let result = state.client_service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(result))
}

async fn update_client(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateClientRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .client_service
        .update(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn delete_client(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.client_service.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
