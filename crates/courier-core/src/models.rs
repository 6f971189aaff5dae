//! Core data models for the dispatch system.

use serde::{Deserialize, Serialize};

use crate::error::DispatchError;

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Check that both components are finite and within range.
    /// Returns the reason on failure.
    pub(crate) fn check(&self) -> Result<(), String> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(format!(
                "non-finite coordinate ({}, {})",
                self.latitude, self.longitude
            ));
        }
        if self.latitude.abs() > 90.0 {
            return Err(format!("latitude {} out of range [-90, 90]", self.latitude));
        }
        if self.longitude.abs() > 180.0 {
            return Err(format!(
                "longitude {} out of range [-180, 180]",
                self.longitude
            ));
        }
        Ok(())
    }
}

/// A delivery drone as reported by the fleet API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drone {
    pub drone_id: u64,
    /// Current position
    pub location: Coordinate,
    /// Deliveries currently on board, in drop-off order.
    /// At most one is flown per trip; only the first is consulted.
    #[serde(default)]
    pub packages: Vec<Package>,
}

impl Drone {
    /// Reject records that would poison the ranking math with NaN.
    ///
    /// Fails fast naming the offending record rather than letting a bad
    /// coordinate propagate into every downstream penalty.
    pub fn validate(&self) -> Result<(), DispatchError> {
        self.location
            .check()
            .map_err(|reason| DispatchError::InvalidDrone {
                drone_id: self.drone_id,
                reason,
            })?;
        if let Some(in_flight) = self.packages.first() {
            in_flight.validate()?;
        }
        Ok(())
    }
}

/// A pending delivery as reported by the fleet API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub package_id: u64,
    pub destination: Coordinate,
    /// Latest acceptable delivery time, Unix seconds
    pub deadline: i64,
}

impl Package {
    /// Reject records with an unusable destination.
    pub fn validate(&self) -> Result<(), DispatchError> {
        self.destination
            .check()
            .map_err(|reason| DispatchError::InvalidPackage {
                package_id: self.package_id,
                reason,
            })
    }
}

/// One accepted drone-to-package pairing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub drone_id: u64,
    pub package_id: u64,
    /// Drone penalty plus best-case depot-to-destination time, seconds
    #[serde(rename = "timeToDeliver")]
    pub time_to_deliver_s: f64,
    /// Deadline minus `now` at match time, seconds
    #[serde(rename = "windowToDeliver")]
    pub window_to_deliver_s: f64,
}

/// Outcome of one dispatch run.
///
/// Every input package id lands in exactly one of the two lists, and no
/// drone id appears in more than one assignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub assignments: Vec<Assignment>,
    pub unassigned_package_ids: Vec<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_fleet_api_drone() {
        // Shape served by the upstream fleet API.
        let json = r#"{
            "droneId": 321361,
            "location": { "latitude": -37.78, "longitude": 144.97 },
            "packages": [{
                "packageId": 7645,
                "destination": { "latitude": -37.79, "longitude": 144.86 },
                "deadline": 1500422409
            }]
        }"#;

        let drone: Drone = serde_json::from_str(json).unwrap();
        assert_eq!(drone.drone_id, 321361);
        assert_eq!(drone.packages.len(), 1);
        assert_eq!(drone.packages[0].package_id, 7645);
        assert_eq!(drone.packages[0].deadline, 1500422409);
    }

    #[test]
    fn test_deserialize_drone_without_packages_field() {
        let json = r#"{
            "droneId": 1,
            "location": { "latitude": 0.0, "longitude": 0.0 }
        }"#;

        let drone: Drone = serde_json::from_str(json).unwrap();
        assert!(drone.packages.is_empty());
    }

    #[test]
    fn test_solution_wire_field_names() {
        let solution = Solution {
            assignments: vec![Assignment {
                drone_id: 1,
                package_id: 2,
                time_to_deliver_s: 600.0,
                window_to_deliver_s: 3600.0,
            }],
            unassigned_package_ids: vec![3],
        };

        let json = serde_json::to_value(&solution).unwrap();
        let assignment = &json["assignments"][0];
        assert_eq!(assignment["droneId"], 1);
        assert_eq!(assignment["packageId"], 2);
        assert_eq!(assignment["timeToDeliver"], 600.0);
        assert_eq!(assignment["windowToDeliver"], 3600.0);
        assert_eq!(json["unassignedPackageIds"][0], 3);
    }

    #[test]
    fn test_validate_rejects_non_finite_location() {
        let drone = Drone {
            drone_id: 42,
            location: Coordinate {
                latitude: f64::NAN,
                longitude: 144.96,
            },
            packages: Vec::new(),
        };

        let err = drone.validate().unwrap_err();
        assert!(matches!(
            err,
            DispatchError::InvalidDrone { drone_id: 42, .. }
        ));
    }

    #[test]
    fn test_validate_surfaces_bad_in_flight_package() {
        let drone = Drone {
            drone_id: 1,
            location: Coordinate {
                latitude: -37.8,
                longitude: 144.9,
            },
            packages: vec![Package {
                package_id: 99,
                destination: Coordinate {
                    latitude: 120.0,
                    longitude: 0.0,
                },
                deadline: 1500422409,
            }],
        };

        let err = drone.validate().unwrap_err();
        assert!(matches!(
            err,
            DispatchError::InvalidPackage { package_id: 99, .. }
        ));
    }
}
