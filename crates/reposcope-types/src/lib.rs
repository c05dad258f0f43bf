//! Shared domain types for reposcope.
//!
//! This crate contains the types used across the reposcope workspace:
//! repository records, view state, configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod error;
pub mod repo;
pub mod view;
