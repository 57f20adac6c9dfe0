pub mod dto;

pub use dto::{Activity, DashboardOverviewStats, MonthlyOverview};
