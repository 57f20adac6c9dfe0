mod report_table;
mod reports;
mod saved_reports;

pub use reports::ReportsPage;
