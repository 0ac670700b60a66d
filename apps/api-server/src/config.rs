//! Application configuration loaded from environment variables.

use std::env;

/// Radius used by the nearby feed when the request gives none.
pub const DEFAULT_NEARBY_DISTANCE_KM: f64 = 10.0;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Load the demo data set into the store at startup.
    pub seed_data: bool,
    pub nearby_default_distance_km: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            seed_data: true,
            nearby_default_distance_km: DEFAULT_NEARBY_DISTANCE_KM,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            seed_data: env::var("SEED_DATA")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.seed_data),
            nearby_default_distance_km: env::var("NEARBY_DEFAULT_DISTANCE_KM")
                .ok()
                .and_then(|d| d.parse::<f64>().ok())
                .filter(|d| d.is_finite() && *d >= 0.0)
                .unwrap_or(defaults.nearby_default_distance_km),
        }
    }
}
