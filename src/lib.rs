//! District ranking engine and its HTTP/CLI glue.
//!
//! The core lives in [`ranking`]: a pure scoring/aggregation/description
//! pipeline over a snapshot of per-district rank data. [`dataset`] loads
//! that snapshot from CSV. Everything else is operational plumbing.

pub mod config;
pub mod dataset;
pub mod error;
pub mod ranking;
pub mod routes;
pub mod server;
pub mod telemetry;
