//! HTTP client for the fleet API.

use anyhow::Result;
use courier_core::models::{Drone, Package};

/// Client for the fleet API serving drone and package snapshots.
pub struct FleetClient {
    base_url: String,
    client: reqwest::Client,
}

impl FleetClient {
    /// Create a new fleet client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the current drone fleet snapshot.
    pub async fn get_drones(&self) -> Result<Vec<Drone>> {
        let url = format!("{}/drones", self.base_url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("Failed to fetch drones: {}", response.status());
        }

        let drones: Vec<Drone> = response.json().await?;
        tracing::debug!("Fetched {} drones from {}", drones.len(), url);
        Ok(drones)
    }

    /// Fetch the pending package backlog.
    pub async fn get_packages(&self) -> Result<Vec<Package>> {
        let url = format!("{}/packages", self.base_url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("Failed to fetch packages: {}", response.status());
        }

        let packages: Vec<Package> = response.json().await?;
        tracing::debug!("Fetched {} packages from {}", packages.len(), url);
        Ok(packages)
    }
}
