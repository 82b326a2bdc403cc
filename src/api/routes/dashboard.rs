use actix_web::{web, HttpResponse};

use crate::api::routes::AppState;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard", web::get().to(dashboard))
        .route("/analytics", web::get().to(analytics));
}

async fn dashboard(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let result = state.dashboard_service.dashboard().await?;
    Ok(HttpResponse::Ok().json(result))
}

async fn analytics(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let result = state.dashboard_service.analytics().await?;
    Ok(HttpResponse::Ok().json(result))
}
