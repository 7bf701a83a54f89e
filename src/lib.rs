//! Hueguard - color accessibility analysis
//!
//! HTTP and JSON-RPC front end for the `color-engine` crate.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
