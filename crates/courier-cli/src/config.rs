//! CLI configuration from environment.

use std::env;

use courier_core::DEFAULT_DEPOT;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub depot_latitude: f64,
    pub depot_longitude: f64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("COURIER_API_URL")
                .unwrap_or_else(|_| "https://codetest.kube.getswift.co".to_string()),
            depot_latitude: env::var("COURIER_DEPOT_LAT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_DEPOT.latitude),
            depot_longitude: env::var("COURIER_DEPOT_LON")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_DEPOT.longitude),
        }
    }
}
