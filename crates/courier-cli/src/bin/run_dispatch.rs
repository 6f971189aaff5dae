//! Fetch the live fleet and backlog, dispatch, and print the solution.
//!
//! Usage:
//!   cargo run -p courier-cli --bin run_dispatch
//!   cargo run -p courier-cli --bin run_dispatch -- --url http://localhost:3000

use anyhow::Result;
use clap::Parser;
use courier_cli::Config;
use courier_core::{Coordinate, DispatchConfig, Dispatcher, DEFAULT_CRUISE_SPEED_KMH};
use courier_sdk::FleetClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Fleet API base URL (overrides COURIER_API_URL)
    #[arg(long)]
    url: Option<String>,

    /// Depot latitude override
    #[arg(long)]
    depot_lat: Option<f64>,

    /// Depot longitude override
    #[arg(long)]
    depot_lon: Option<f64>,

    /// Fleet cruising speed in km/h
    #[arg(long, default_value_t = DEFAULT_CRUISE_SPEED_KMH)]
    speed: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("run_dispatch=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let env = Config::from_env();

    let base_url = args.url.unwrap_or(env.api_url);
    let depot = Coordinate {
        latitude: args.depot_lat.unwrap_or(env.depot_latitude),
        longitude: args.depot_lon.unwrap_or(env.depot_longitude),
    };

    let client = FleetClient::new(base_url);
    tracing::info!("Fetching fleet and backlog snapshots...");
    let (drones, packages) = tokio::try_join!(client.get_drones(), client.get_packages())?;
    tracing::info!(
        "Dispatching {} packages across {} drones",
        packages.len(),
        drones.len()
    );

    let dispatcher = Dispatcher::new(DispatchConfig {
        depot,
        cruise_speed_kmh: args.speed,
        ..DispatchConfig::default()
    });
    let solution = dispatcher.solve(drones, packages)?;

    tracing::info!(
        "Assigned {} packages, {} unassignable",
        solution.assignments.len(),
        solution.unassigned_package_ids.len()
    );
    println!("{}", serde_json::to_string_pretty(&solution)?);

    Ok(())
}
