//! CLI tools for the drone courier dispatch system.

pub mod config;
pub mod scenario;

pub use config::Config;
pub use scenario::{generate_scenario, Scenario};
