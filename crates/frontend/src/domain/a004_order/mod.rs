pub mod api;
pub mod list;
pub mod timeline;
pub mod ui;
