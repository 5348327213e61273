//! Shared HTTP plumbing: application state and health probe.

pub mod http;

pub use http::{health, AppState};
