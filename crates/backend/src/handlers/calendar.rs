use axum::{extract::Query, http::StatusCode, Json};
use contracts::shared::calendar::{resolve_iso_week_str, IsoWeekAssignment};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct IsoWeekQuery {
    pub date: String,
}

/// GET /api/calendar/iso_week?date=2024-12-31
pub async fn get_iso_week(
    Query(query): Query<IsoWeekQuery>,
) -> Result<Json<IsoWeekAssignment>, StatusCode> {
    match resolve_iso_week_str(&query.date) {
        Ok(assignment) => Ok(Json(assignment)),
        Err(e) => {
            tracing::warn!("Calendar: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}
