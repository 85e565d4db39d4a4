//! Business logic services for the Data Weaver gateway

pub mod dashboard;

pub use dashboard::DashboardService;
