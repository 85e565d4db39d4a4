//! Soil condition models

use serde::{Deserialize, Serialize};

/// Soil conditions for the analysed location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SoilSnapshot {
    /// pH, 0-14
    pub ph: f64,
    /// kg/ha
    pub nitrogen: f64,
    /// kg/ha
    pub phosphorus: f64,
    /// kg/ha
    pub potassium: f64,
    /// Percent, 0-100
    pub organic_matter: f64,
    /// Percent, 0-100
    pub moisture: f64,
}
