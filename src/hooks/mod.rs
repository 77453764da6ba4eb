pub mod use_chart;
pub mod use_dashboard;
