//! REST API server for invoice-automation ROI scenarios
//!
//! This crate provides an HTTP REST API over `roi_core` and `roi_store`,
//! exposing ad-hoc simulation, saved scenario CRUD, and HTML report endpoints.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
