//! Randomized fleet and backlog generation for offline demo runs.

use courier_core::models::{Coordinate, Drone, Package};
use rand::Rng;

/// Scatter radius around the depot, approx 10km
const RADIUS_DEG: f64 = 0.09;

/// One loaded drone per this many fleet members
const LOADED_EVERY: usize = 3;

const DRONE_ID_BASE: u64 = 1_000;
const PACKAGE_ID_BASE: u64 = 5_000;
const IN_FLIGHT_ID_BASE: u64 = 9_000;

/// A generated fleet snapshot and package backlog.
pub struct Scenario {
    pub drones: Vec<Drone>,
    pub packages: Vec<Package>,
}

/// Generate `drone_count` drones and `package_count` pending packages
/// scattered around `depot`, with deadlines spread up to
/// `deadline_spread_s` seconds after `now`.
///
/// Every third drone carries an in-flight delivery so the penalty math
/// sees both idle and loaded fleet members.
pub fn generate_scenario(
    depot: Coordinate,
    drone_count: usize,
    package_count: usize,
    deadline_spread_s: i64,
    now: i64,
) -> Scenario {
    let mut rng = rand::rng();

    let drones = (0..drone_count)
        .map(|i| {
            let mut drone = Drone {
                drone_id: DRONE_ID_BASE + i as u64,
                location: random_point_near(depot, &mut rng),
                packages: Vec::new(),
            };
            if i % LOADED_EVERY == LOADED_EVERY - 1 {
                drone.packages.push(Package {
                    package_id: IN_FLIGHT_ID_BASE + i as u64,
                    destination: random_point_near(depot, &mut rng),
                    deadline: now + rng.random_range(60..=deadline_spread_s.max(61)),
                });
            }
            drone
        })
        .collect();

    let packages = (0..package_count)
        .map(|i| Package {
            package_id: PACKAGE_ID_BASE + i as u64,
            destination: random_point_near(depot, &mut rng),
            deadline: now + rng.random_range(60..=deadline_spread_s.max(61)),
        })
        .collect();

    Scenario { drones, packages }
}

fn random_point_near(center: Coordinate, rng: &mut impl Rng) -> Coordinate {
    Coordinate {
        latitude: center.latitude + rng.random_range(-RADIUS_DEG..RADIUS_DEG),
        longitude: center.longitude + rng.random_range(-RADIUS_DEG..RADIUS_DEG),
    }
}
