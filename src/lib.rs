//! degurba-rs: core engine for an interactive degree-of-urbanisation map
//! dashboard.
//!
//! This crate provides a Rust-idiomatic API and a strict architectural split:
//! pure geometry and projection math in [`core`], classification schemes in
//! [`classify`], selection and display state in [`interaction`], and a
//! backend-agnostic render layer driven by the [`api::DashboardEngine`]
//! facade.

pub mod api;
pub mod classify;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{DashboardConfig, DashboardEngine};
pub use error::{DashboardError, DashboardResult};
