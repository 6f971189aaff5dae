//! Courier Core - Deadline-aware dispatch of a drone fleet.
//!
//! This crate pairs a snapshot of delivery drones with a backlog of
//! pending packages so that as many packages as possible arrive before
//! their deadlines. Drones are ranked by how soon they are free at the
//! depot, packages by deadline, and a greedy two-cursor pass produces a
//! feasibility-checked [`Solution`].

pub mod config;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod ranking;
pub mod spatial;

pub use config::{ClockPolicy, DispatchConfig, DEFAULT_CRUISE_SPEED_KMH, DEFAULT_DEPOT};
pub use dispatch::Dispatcher;
pub use error::DispatchError;
pub use models::{Assignment, Coordinate, Drone, Package, Solution};
pub use ranking::{drone_penalty_s, rank_drones, rank_packages, RankedDrone, RankedPackage};
pub use spatial::{great_circle_distance_km, travel_time_s};
