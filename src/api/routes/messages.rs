use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::api::dtos::{ContactRequest, MessageQueryParams, RespondRequest};
use crate::api::routes::AppState;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/messages")
            .route("", web::get().to(list_messages))
            .route("", web::post().to(submit_contact))
            .route("/{id}", web::get().to(get_message))
            .route("/{id}", web::delete().to(delete_message))
            .route("/{id}/read", web::post().to(mark_read))
            .route("/{id}/respond", web::post().to(respond)),
    );
}

async fn list_messages(
    state: web::Data<AppState>,
    query: web::Query<MessageQueryParams>,
) -> AppResult<HttpResponse> {
    let result = state.message_service.list(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn get_message(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let result = state.message_service.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn submit_contact(
    state: web::Data<AppState>,
    payload: web::Json<ContactRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .message_service
        .submit_contact(payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(result))
}

async fn mark_read(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let result = state.message_service.mark_read(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn respond(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<RespondRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .message_service
        .respond(path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn delete_message(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.message_service.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
