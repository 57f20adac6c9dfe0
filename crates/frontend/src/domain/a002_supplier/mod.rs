pub mod api;
pub mod list;
pub mod performance;
pub mod ui;
