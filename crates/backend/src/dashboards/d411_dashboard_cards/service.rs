use contracts::dashboards::d411_dashboard_cards::{DashboardCardsRequest, DashboardCardsResponse};
use contracts::shared::calendar::{resolve_iso_week_str, CalendarError};

/// Compute the dashboard card values
pub fn build_dashboard_cards(
    request: &DashboardCardsRequest,
) -> Result<DashboardCardsResponse, CalendarError> {
    let current_week = request
        .reference_date
        .as_deref()
        .map(resolve_iso_week_str)
        .transpose()?;

    let mut total_hours = 0.0;
    let mut current_week_hours = 0.0;
    for entry in &request.timesheets {
        let assignment = resolve_iso_week_str(&entry.date)?;
        total_hours += entry.hours;
        if current_week == Some(assignment) {
            current_week_hours += entry.hours;
        }
    }

    let invoiced_total: f64 = request.invoices.iter().map(|i| i.amount).sum();
    let paid_total: f64 = request
        .invoices
        .iter()
        .filter(|i| i.paid)
        .map(|i| i.amount)
        .sum();
    let unpaid_invoices_count = request.invoices.iter().filter(|i| !i.paid).count();

    Ok(DashboardCardsResponse {
        total_hours,
        current_week,
        current_week_hours,
        invoiced_total,
        paid_total,
        outstanding_total: invoiced_total - paid_total,
        invoices_count: request.invoices.len(),
        unpaid_invoices_count,
    })
}
