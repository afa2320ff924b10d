//! Vigil Core
//!
//! Core types for the Vigil batch-task monitoring system.
//!
//! This crate contains:
//! - Domain types: task identity, task observations, and monitor outcomes
//!
//! The scheduler client deserializes observations straight from the remote
//! API; the monitors turn sequences of observations into final outcomes.

pub mod domain;
