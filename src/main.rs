use std::sync::Arc;
use std::time::Instant;

use actix_web::dev::Service as _;
use actix_web::{middleware::Logger, web, App, HttpServer};
use car_rental_backend::api::{openapi, routes, routes::AppState};
use car_rental_backend::application::{
    CarService, ClientService, DashboardService, DriverService, LocationService,
    MaintenanceService, MessageService, OrderService,
};
use car_rental_backend::config::AppConfig;
use car_rental_backend::infrastructure::db::{migrations::run_migrations, pool::create_pool};
use car_rental_backend::infrastructure::repositories::{
    CarRepositoryImpl, ClientRepositoryImpl, DriverRepositoryImpl, LocationRepositoryImpl,
    MaintenanceRepositoryImpl, MessageRepositoryImpl, OrderRepositoryImpl,
};
use car_rental_backend::observability::error_tracking::capture_unexpected_5xx;
use car_rental_backend::observability::AppMetrics;
use car_rental_backend::security::{cors_middleware, security_headers};
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().expect("failed to load application configuration");

    let filter = EnvFilter::new(config.logging.level.clone());
    if config.logging.json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }

    let pool = create_pool(&config.database)
        .await
        .expect("failed to create database pool");

    run_migrations(&pool)
        .await
        .expect("database migrations failed");

    let car_repo = Arc::new(CarRepositoryImpl::new(pool.clone()));
    let location_repo = Arc::new(LocationRepositoryImpl::new(pool.clone()));
    let client_repo = Arc::new(ClientRepositoryImpl::new(pool.clone()));
    let driver_repo = Arc::new(DriverRepositoryImpl::new(pool.clone()));
    let order_repo = Arc::new(OrderRepositoryImpl::new(pool.clone()));
    let message_repo = Arc::new(MessageRepositoryImpl::new(pool.clone()));
    let maintenance_repo = Arc::new(MaintenanceRepositoryImpl::new(pool.clone()));

    let state = AppState {
        car_service: Arc::new(CarService::new(car_repo.clone(), location_repo.clone())),
        location_service: Arc::new(LocationService::new(
            location_repo.clone(),
            car_repo.clone(),
            client_repo.clone(),
            driver_repo.clone(),
        )),
        client_service: Arc::new(ClientService::new(client_repo.clone())),
        driver_service: Arc::new(DriverService::new(driver_repo.clone())),
        order_service: Arc::new(OrderService::new(order_repo.clone())),
        message_service: Arc::new(MessageService::new(message_repo)),
        maintenance_service: Arc::new(MaintenanceService::new(maintenance_repo, car_repo.clone())),
        dashboard_service: Arc::new(DashboardService::new(
            car_repo,
            driver_repo,
            client_repo,
            order_repo,
            location_repo,
        )),
        security: config.security.clone(),
        app_environment: config.app.environment.clone(),
        metrics: Arc::new(AppMetrics::default()),
        db_pool: Some(pool.clone()),
    };

    let bind_host = config.app.host.clone();
    let bind_port = config.app.port;
    let security_config = config.security.clone();
    let metrics = state.metrics.clone();

    info!(host = %bind_host, port = bind_port, "starting car rental backend");

    HttpServer::new(move || {
        let metrics = metrics.clone();
        App::new()
            .wrap(Logger::default())
            .wrap_fn(move |req, srv| {
                let request_id = Uuid::new_v4().to_string();
                let path = req.path().to_string();
                let method = req.method().to_string();
                let metrics = metrics.clone();
                let start = Instant::now();

                let fut = srv.call(req);
                async move {
                    match fut.await {
                        Ok(mut response) => {
                            response.headers_mut().insert(
                                actix_web::http::header::HeaderName::from_static("x-request-id"),
                                actix_web::http::header::HeaderValue::from_str(&request_id)
                                    .unwrap_or_else(|_| {
                                        actix_web::http::header::HeaderValue::from_static(
                                            "invalid-request-id",
                                        )
                                    }),
                            );

                            let status = response.status().as_u16();
                            let latency_ms = start.elapsed().as_millis() as u64;
                            metrics.record_request(status, latency_ms);

                            info!(
                                request_id = %request_id,
                                method = %method,
                                path = %path,
                                status = status,
                                latency_ms = latency_ms,
                                "request completed"
                            );

                            if status >= 500 {
                                let _ = capture_unexpected_5xx(&path, &method, status, &request_id);
                            }
                            Ok(response)
                        }
                        Err(error) => Err(error),
                    }
                }
            })
            .wrap(cors_middleware(&security_config))
            .wrap(security_headers())
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
            .configure(openapi::configure_swagger_ui)
    })
    .bind((bind_host, bind_port))?
    .run()
    .await
}
