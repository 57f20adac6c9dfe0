pub mod activity;
pub mod api;
pub mod cards;
pub mod snapshot;
pub mod ui;
