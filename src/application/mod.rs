pub mod planning_service;

pub use planning_service::*;
