//! Wire contracts of the inventory API, shared by the frontend and its tests.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod system;
