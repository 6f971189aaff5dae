//! Drone and package ranking.
//!
//! Both rankers enrich caller-owned records with a derived metric and
//! return them ordered for the matcher: drones by how soon they are free
//! at the depot, packages by deadline.

use std::cmp::Ordering;

use crate::config::DispatchConfig;
use crate::error::DispatchError;
use crate::models::{Drone, Package};
use crate::spatial::travel_time_s;

/// A drone paired with its penalty: seconds until it is next free at the
/// depot to start a new delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedDrone {
    pub drone: Drone,
    pub penalty_s: f64,
}

/// A package paired with its best-case depot-to-destination travel time.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPackage {
    pub package: Package,
    pub min_delivery_time_s: f64,
}

/// Seconds until `drone` is free at the depot.
///
/// An idle drone only has to fly home. A loaded drone finishes its
/// current drop-off first, then returns. Only the first in-flight package
/// is consulted; one package per trip is the current scope.
pub fn drone_penalty_s(drone: &Drone, config: &DispatchConfig) -> f64 {
    match drone.packages.first() {
        Some(in_flight) => {
            let to_drop_off =
                travel_time_s(drone.location, in_flight.destination, config.cruise_speed_kmh);
            let back_to_depot =
                travel_time_s(in_flight.destination, config.depot, config.cruise_speed_kmh);
            to_drop_off + back_to_depot
        }
        None => travel_time_s(drone.location, config.depot, config.cruise_speed_kmh),
    }
}

/// Rank drones soonest-free first.
///
/// Validates every record up front and fails on the first malformed one.
pub fn rank_drones(
    drones: Vec<Drone>,
    config: &DispatchConfig,
) -> Result<Vec<RankedDrone>, DispatchError> {
    for drone in &drones {
        drone.validate()?;
    }

    let mut ranked: Vec<RankedDrone> = drones
        .into_iter()
        .map(|drone| {
            let penalty_s = drone_penalty_s(&drone, config);
            RankedDrone { drone, penalty_s }
        })
        .collect();

    // Stable sort: equal penalties keep their input order.
    ranked.sort_by(|a, b| a.penalty_s.partial_cmp(&b.penalty_s).unwrap_or(Ordering::Equal));
    Ok(ranked)
}

/// Rank packages earliest deadline first.
///
/// The delivery-time metric is carried for the matcher; the sort key is
/// the raw deadline, not the metric.
pub fn rank_packages(
    packages: Vec<Package>,
    config: &DispatchConfig,
) -> Result<Vec<RankedPackage>, DispatchError> {
    for package in &packages {
        package.validate()?;
    }

    let mut ranked: Vec<RankedPackage> = packages
        .into_iter()
        .map(|package| {
            let min_delivery_time_s =
                travel_time_s(config.depot, package.destination, config.cruise_speed_kmh);
            RankedPackage {
                package,
                min_delivery_time_s,
            }
        })
        .collect();

    ranked.sort_by_key(|ranked| ranked.package.deadline);
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;
    use crate::spatial::travel_time_s;

    fn config() -> DispatchConfig {
        DispatchConfig::default()
    }

    fn drone(drone_id: u64, latitude: f64, longitude: f64) -> Drone {
        Drone {
            drone_id,
            location: Coordinate {
                latitude,
                longitude,
            },
            packages: Vec::new(),
        }
    }

    fn package(package_id: u64, latitude: f64, longitude: f64, deadline: i64) -> Package {
        Package {
            package_id,
            destination: Coordinate {
                latitude,
                longitude,
            },
            deadline,
        }
    }

    #[test]
    fn test_idle_drone_penalty_is_flight_home() {
        let config = config();
        let idle = drone(1, -37.78, 144.85);

        let penalty = drone_penalty_s(&idle, &config);
        let expected = travel_time_s(idle.location, config.depot, config.cruise_speed_kmh);
        assert_eq!(penalty, expected);
    }

    #[test]
    fn test_loaded_drone_penalty_covers_both_legs() {
        let config = config();
        let mut loaded = drone(2, -37.78, 144.85);
        loaded.packages.push(package(10, -37.70, 145.10, 0));

        let drop_off = loaded.packages[0].destination;
        let expected = travel_time_s(loaded.location, drop_off, config.cruise_speed_kmh)
            + travel_time_s(drop_off, config.depot, config.cruise_speed_kmh);
        assert_eq!(drone_penalty_s(&loaded, &config), expected);
    }

    #[test]
    fn test_drone_at_depot_has_zero_penalty() {
        let config = config();
        let at_depot = drone(3, config.depot.latitude, config.depot.longitude);
        assert_eq!(drone_penalty_s(&at_depot, &config), 0.0);
    }

    #[test]
    fn test_drones_sorted_soonest_free_first() {
        let config = config();
        let far = drone(1, -37.0, 144.0);
        let near = drone(2, -37.81, 144.96);
        let at_depot = drone(3, config.depot.latitude, config.depot.longitude);

        let ranked = rank_drones(vec![far, near, at_depot], &config).unwrap();
        let ids: Vec<u64> = ranked.iter().map(|r| r.drone.drone_id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert!(ranked[0].penalty_s <= ranked[1].penalty_s);
        assert!(ranked[1].penalty_s <= ranked[2].penalty_s);
    }

    #[test]
    fn test_equal_penalty_drones_keep_input_order() {
        let config = config();
        let first = drone(1, config.depot.latitude, config.depot.longitude);
        let second = drone(2, config.depot.latitude, config.depot.longitude);

        let ranked = rank_drones(vec![first, second], &config).unwrap();
        let ids: Vec<u64> = ranked.iter().map(|r| r.drone.drone_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_packages_sorted_by_deadline_not_distance() {
        let config = config();
        // The far package has the earlier deadline; it must come first.
        let near_late = package(1, -37.82, 144.97, 2_000);
        let far_early = package(2, -36.0, 146.0, 1_000);

        let ranked = rank_packages(vec![near_late, far_early], &config).unwrap();
        let ids: Vec<u64> = ranked.iter().map(|r| r.package.package_id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(ranked[0].min_delivery_time_s > ranked[1].min_delivery_time_s);
    }

    #[test]
    fn test_rank_drones_fails_on_malformed_record() {
        let config = config();
        let bad = drone(7, f64::INFINITY, 144.0);

        let err = rank_drones(vec![drone(1, -37.8, 144.9), bad], &config).unwrap_err();
        assert!(matches!(err, DispatchError::InvalidDrone { drone_id: 7, .. }));
    }

    #[test]
    fn test_rank_packages_fails_on_malformed_record() {
        let config = config();
        let bad = package(9, -37.8, f64::NAN, 1_000);

        let err = rank_packages(vec![bad], &config).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::InvalidPackage { package_id: 9, .. }
        ));
    }
}
