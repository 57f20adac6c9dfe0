pub mod d400_overview;
pub mod d401_reports;

pub use d400_overview::ui::OverviewDashboard;
pub use d401_reports::ui::ReportsPage;
