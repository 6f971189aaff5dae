//! Courier SDK - client for the fleet API.
//!
//! Supplies the typed drone and package snapshots the dispatch core
//! consumes. Retrieval is a thin GET-and-decode; retry and freshness
//! policy belong to the caller.

pub mod client;

pub use client::FleetClient;
