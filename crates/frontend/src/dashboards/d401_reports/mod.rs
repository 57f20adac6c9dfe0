pub mod columns;
pub mod datasets;
pub mod saved;
pub mod ui;
