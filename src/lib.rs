//! Theioptera research dashboard client
//!
//! State store, agent cards, sessions and terminal rendering.

pub mod config;
/// Agent cards, session aggregation and the supporting page components
pub mod dashboard;
pub mod pages;
/// Client state store, storage backends and persisted models
pub mod state;
/// Terminal rendering
pub mod ui;
