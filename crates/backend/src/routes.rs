use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;
use crate::shared::request_logger::request_logger;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Calendar
        .route(
            "/api/calendar/iso_week",
            get(handlers::calendar::get_iso_week),
        )
        // D410 Weekly Timesheet Dashboard
        .route(
            "/api/d410/weekly_timesheet",
            post(handlers::d410_weekly_timesheet::get_weekly_timesheet),
        )
        // D411 Dashboard Cards
        .route(
            "/api/d411/dashboard_cards",
            post(handlers::d411_dashboard_cards::get_dashboard_cards),
        )
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
