//! Shared types and view logic for the Data Weaver crop advisor
//!
//! This crate holds the analysis wire models and the pure transforms that turn
//! an analysis payload into a dashboard. It is used by the gateway service and,
//! through WASM, by the browser front end.

pub mod chart;
pub mod classification;
pub mod models;
pub mod presentation;
pub mod session;
pub mod validation;
pub mod view_model;

pub use chart::*;
pub use classification::*;
pub use models::*;
pub use presentation::*;
pub use session::*;
pub use validation::*;
pub use view_model::*;
