use serde::{Deserialize, Serialize};

use crate::dashboards::d410_weekly_timesheet::TimesheetEntryDto;
use crate::shared::calendar::IsoWeekAssignment;

/// Invoice record as sent by the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceDto {
    pub id: String,
    /// Date in format "YYYY-MM-DD"
    pub date: String,
    pub client_ref: String,
    #[serde(default)]
    pub commessa_ref: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub paid: bool,
}

/// Request for dashboard cards
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardCardsRequest {
    /// Day used for the "current week" card, format "YYYY-MM-DD"
    #[serde(default)]
    pub reference_date: Option<String>,
    #[serde(default)]
    pub timesheets: Vec<TimesheetEntryDto>,
    #[serde(default)]
    pub invoices: Vec<InvoiceDto>,
}

/// Values shown on the dashboard cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardCardsResponse {
    pub total_hours: f64,
    /// Week bucket of `reference_date`, None if no reference date was sent
    pub current_week: Option<IsoWeekAssignment>,
    pub current_week_hours: f64,
    pub invoiced_total: f64,
    pub paid_total: f64,
    pub outstanding_total: f64,
    pub invoices_count: usize,
    pub unpaid_invoices_count: usize,
}
