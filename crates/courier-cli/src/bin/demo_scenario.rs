//! Offline demo: dispatch a randomized fleet against a randomized backlog.
//!
//! Generates drones and packages scattered around the depot, runs one
//! dispatch pass, and prints the outcome. No network involved.
//!
//! Usage:
//!   cargo run -p courier-cli --bin demo_scenario
//!   cargo run -p courier-cli --bin demo_scenario -- --drones 20 --packages 50

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use courier_cli::generate_scenario;
use courier_core::{DispatchConfig, Dispatcher};

#[derive(Parser, Debug)]
#[command(author, version, about = "Offline demo: randomized dispatch run")]
struct Args {
    /// Number of drones in the fleet
    #[arg(long, default_value_t = 10)]
    drones: usize,

    /// Number of pending packages
    #[arg(long, default_value_t = 25)]
    packages: usize,

    /// Deadline spread in seconds after now
    #[arg(long, default_value_t = 3600)]
    spread: i64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = DispatchConfig::default();
    let now = Utc::now().timestamp();

    let scenario = generate_scenario(config.depot, args.drones, args.packages, args.spread, now);
    println!(
        "Generated {} drones and {} packages around the depot",
        scenario.drones.len(),
        scenario.packages.len()
    );

    let dispatcher = Dispatcher::new(config);
    let solution = dispatcher.solve_at(scenario.drones, scenario.packages, now)?;

    println!("Assignments (droneId, packageId, needed s, window s):");
    for assignment in &solution.assignments {
        println!(
            "  {:<6} {:<6} {:>8.0} {:>8.0}",
            assignment.drone_id,
            assignment.package_id,
            assignment.time_to_deliver_s,
            assignment.window_to_deliver_s
        );
    }
    if solution.unassigned_package_ids.is_empty() {
        println!("Every package assigned.");
    } else {
        println!(
            "Unassigned ({}): {:?}",
            solution.unassigned_package_ids.len(),
            solution.unassigned_package_ids
        );
    }

    Ok(())
}
