use serde::{Deserialize, Serialize};

use crate::shared::calendar::IsoWeekAssignment;

/// Timesheet record as sent by the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetEntryDto {
    pub id: String,
    /// Date in format "YYYY-MM-DD"
    pub date: String,
    pub user_ref: String,
    /// Job order (commessa) the hours are booked against
    pub commessa_ref: String,
    pub hours: f64,
}

/// Request for weekly timesheet summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyTimesheetRequest {
    pub entries: Vec<TimesheetEntryDto>,
    /// Only entries of this user (optional)
    #[serde(default)]
    pub user_ref: Option<String>,
}

/// Hours aggregated for one week bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekBucket {
    pub week: u32,
    pub mese: u32,
    pub anno: i32,
    pub total_hours: f64,
    pub entries_count: usize,
    pub users_count: usize,
}

impl WeekBucket {
    pub fn empty(assignment: IsoWeekAssignment) -> Self {
        Self {
            week: assignment.week,
            mese: assignment.mese,
            anno: assignment.anno,
            total_hours: 0.0,
            entries_count: 0,
            users_count: 0,
        }
    }

    pub fn assignment(&self) -> IsoWeekAssignment {
        IsoWeekAssignment {
            week: self.week,
            mese: self.mese,
            anno: self.anno,
        }
    }
}

/// Response for weekly timesheet summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyTimesheetResponse {
    /// Buckets in chronological order
    pub buckets: Vec<WeekBucket>,
    pub total_hours: f64,
}
