use axum::{http::StatusCode, Json};
use contracts::dashboards::d410_weekly_timesheet::{WeeklyTimesheetRequest, WeeklyTimesheetResponse};

use crate::dashboards::d410_weekly_timesheet::service;

/// POST /api/d410/weekly_timesheet
pub async fn get_weekly_timesheet(
    Json(request): Json<WeeklyTimesheetRequest>,
) -> Result<Json<WeeklyTimesheetResponse>, StatusCode> {
    tracing::info!(
        "D410 Dashboard: Summarizing {} timesheet entries",
        request.entries.len()
    );

    match service::build_weekly_summary(&request) {
        Ok(response) => {
            tracing::info!(
                "D410 Dashboard: Returning {} week buckets",
                response.buckets.len()
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::warn!("D410 Dashboard: Rejected request: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
    }
}
