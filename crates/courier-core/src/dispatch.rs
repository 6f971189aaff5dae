//! Greedy deadline-aware matching of drones to packages.
//!
//! Pairs the earliest-deadline pending package with the soonest-free
//! drone, accepting the pairing only when the package can still make its
//! deadline. A two-cursor merge over the two ranked sequences, not a
//! search over all pairings.

use chrono::Utc;

use crate::config::{ClockPolicy, DispatchConfig};
use crate::error::DispatchError;
use crate::models::{Assignment, Drone, Package, Solution};
use crate::ranking::{rank_drones, rank_packages};

/// Batch dispatcher: one call pairs a fleet snapshot with a package
/// backlog and produces a [`Solution`].
///
/// The dispatcher takes ownership of its input snapshot for the duration
/// of one run; concurrent runs need their own copies.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    config: DispatchConfig,
}

impl Dispatcher {
    pub fn new(config: DispatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Solve against the system clock, honoring the configured
    /// [`ClockPolicy`].
    pub fn solve(
        &self,
        drones: Vec<Drone>,
        packages: Vec<Package>,
    ) -> Result<Solution, DispatchError> {
        match self.config.clock {
            ClockPolicy::SampleOnce => self.solve_at(drones, packages, Utc::now().timestamp()),
            ClockPolicy::SamplePerIteration => {
                self.run(drones, packages, || Utc::now().timestamp())
            }
        }
    }

    /// Solve with a pinned `now` (Unix seconds).
    ///
    /// Two calls with the same snapshot and the same `now` produce
    /// identical solutions.
    pub fn solve_at(
        &self,
        drones: Vec<Drone>,
        packages: Vec<Package>,
        now: i64,
    ) -> Result<Solution, DispatchError> {
        self.run(drones, packages, || now)
    }

    fn run(
        &self,
        drones: Vec<Drone>,
        packages: Vec<Package>,
        mut now: impl FnMut() -> i64,
    ) -> Result<Solution, DispatchError> {
        let drones = rank_drones(drones, &self.config)?;
        let packages = rank_packages(packages, &self.config)?;

        let mut solution = Solution::default();
        let mut package_cursor = 0;
        let mut drone_cursor = 0;

        while package_cursor < packages.len() && drone_cursor < drones.len() {
            let candidate = &packages[package_cursor];
            let drone = &drones[drone_cursor];

            let window_s = (candidate.package.deadline - now()) as f64;
            let needed_s = drone.penalty_s + candidate.min_delivery_time_s;

            // Strictly positive slack required; an exact tie is infeasible.
            if window_s > needed_s {
                solution.assignments.push(Assignment {
                    drone_id: drone.drone.drone_id,
                    package_id: candidate.package.package_id,
                    time_to_deliver_s: needed_s,
                    window_to_deliver_s: window_s,
                });
                package_cursor += 1;
                drone_cursor += 1;
            } else {
                // No drone can make this deadline: everything behind this
                // drone is slower still. The drone stays available for the
                // next package and is never retried against this one.
                solution
                    .unassigned_package_ids
                    .push(candidate.package.package_id);
                package_cursor += 1;
            }
        }

        // Drones exhausted: everything still pending is unassignable.
        for candidate in &packages[package_cursor..] {
            solution
                .unassigned_package_ids
                .push(candidate.package.package_id);
        }

        Ok(solution)
    }
}
