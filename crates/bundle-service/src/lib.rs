//! Core library for the bundle service: the product catalog, the
//! eligibility rule set, the customization engine, and the HTTP router
//! the API service mounts.

pub mod bundles;
pub mod config;
pub mod error;
pub mod telemetry;
