//! External API integrations

pub mod analysis;

pub use analysis::AnalysisClient;
