//! Configuration for a dispatch run.

use serde::{Deserialize, Serialize};

use crate::models::Coordinate;

/// Default depot: 303 Collins St, Melbourne VIC 3000, Australia.
pub const DEFAULT_DEPOT: Coordinate = Coordinate {
    latitude: -37.816664,
    longitude: 144.9616589,
};

/// Cruising speed shared by the whole fleet, in km/h.
pub const DEFAULT_CRUISE_SPEED_KMH: f64 = 50.0;

/// Configuration threaded through ranking and matching.
///
/// One value per dispatch run; nothing here is mutated while a run is in
/// progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Common origin and return point for every drone
    pub depot: Coordinate,
    /// Fleet cruising speed in km/h
    pub cruise_speed_kmh: f64,
    /// When the matcher reads the wall clock
    pub clock: ClockPolicy,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            depot: DEFAULT_DEPOT,
            cruise_speed_kmh: DEFAULT_CRUISE_SPEED_KMH,
            clock: ClockPolicy::SampleOnce,
        }
    }
}

/// Wall-clock sampling policy for the matching loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockPolicy {
    /// Read `now` once before the loop starts. Two runs over the same
    /// snapshot with the same clock reading produce identical solutions.
    #[default]
    SampleOnce,
    /// Re-read `now` on every loop iteration.
    SamplePerIteration,
}
