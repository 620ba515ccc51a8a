use axum::{http::StatusCode, Json};
use contracts::dashboards::d411_dashboard_cards::{DashboardCardsRequest, DashboardCardsResponse};

use crate::dashboards::d411_dashboard_cards::service;

/// POST /api/d411/dashboard_cards
pub async fn get_dashboard_cards(
    Json(request): Json<DashboardCardsRequest>,
) -> Result<Json<DashboardCardsResponse>, StatusCode> {
    match service::build_dashboard_cards(&request) {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::warn!("D411 Dashboard: Rejected request: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}
