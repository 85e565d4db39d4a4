//! Weather data models

use serde::{Deserialize, Serialize};

/// Current weather conditions reported for the analysed location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    /// Location name as echoed by the backend
    pub location: String,
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity, 0-100 %
    pub humidity: f64,
    /// Rainfall in mm
    pub rainfall: f64,
    pub description: String,
}
