pub mod calendar;
pub mod d410_weekly_timesheet;
pub mod d411_dashboard_cards;
