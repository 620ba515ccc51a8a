use chrono::NaiveDate;
use contracts::dashboards::d410_weekly_timesheet::{
    TimesheetEntryDto, WeekBucket, WeeklyTimesheetRequest, WeeklyTimesheetResponse,
};
use contracts::shared::calendar::{
    parse_calendar_date, resolve_iso_week, CalendarError, IsoWeekAssignment,
};
use std::collections::{HashMap, HashSet};

struct BucketAccumulator<'a> {
    bucket: WeekBucket,
    users: HashSet<&'a str>,
    first_date: NaiveDate,
}

/// Group timesheet entries by week bucket and sum hours.
///
/// Buckets are ordered by their earliest date. The year-end rule can give two
/// buckets the same (anno, mese), e.g. week 53 and week 1 of December 2024,
/// so ordering by the assignment alone is not chronological.
///
/// A single unparseable date rejects the whole request.
pub fn build_weekly_summary(
    request: &WeeklyTimesheetRequest,
) -> Result<WeeklyTimesheetResponse, CalendarError> {
    let entries: Vec<&TimesheetEntryDto> = request
        .entries
        .iter()
        .filter(|e| match &request.user_ref {
            Some(user_ref) => &e.user_ref == user_ref,
            None => true,
        })
        .collect();

    let mut buckets: HashMap<IsoWeekAssignment, BucketAccumulator> = HashMap::new();

    for entry in entries {
        let date = parse_calendar_date(&entry.date)?;
        let assignment = resolve_iso_week(date);
        let acc = buckets
            .entry(assignment)
            .or_insert_with(|| BucketAccumulator {
                bucket: WeekBucket::empty(assignment),
                users: HashSet::new(),
                first_date: date,
            });

        acc.bucket.total_hours += entry.hours;
        acc.bucket.entries_count += 1;
        acc.users.insert(entry.user_ref.as_str());
        acc.first_date = acc.first_date.min(date);
    }

    let mut accumulators: Vec<BucketAccumulator> = buckets.into_values().collect();
    accumulators.sort_by_key(|acc| (acc.first_date, acc.bucket.assignment().sort_key()));

    let buckets: Vec<WeekBucket> = accumulators
        .into_iter()
        .map(|acc| WeekBucket {
            users_count: acc.users.len(),
            ..acc.bucket
        })
        .collect();
    let total_hours: f64 = buckets.iter().map(|b| b.total_hours).sum();

    if let (Some(first), Some(last)) = (buckets.first(), buckets.last()) {
        tracing::debug!(
            "D410: {} week buckets from {} to {}, {} hours in total",
            buckets.len(),
            first.assignment().label(),
            last.assignment().label(),
            total_hours
        );
    }

    Ok(WeeklyTimesheetResponse {
        buckets,
        total_hours,
    })
}
