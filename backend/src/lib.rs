//! Theioptera Backend Library
//!
//! Mock research agents behind a small HTTP API. The binary in
//! `src/main.rs` adds middleware and serves [`api::router`].

/// Mock agent generators and their payload types
pub mod agents;
/// HTTP routes for the agents and the catalog
pub mod api;
/// Server configuration
pub mod config;
/// Server error type
pub mod error;
