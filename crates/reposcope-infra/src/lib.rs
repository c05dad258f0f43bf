//! Infrastructure layer for reposcope.
//!
//! Contains implementations of the port traits defined in `reposcope-core`:
//! the GitHub REST client, token storage backends (environment variables,
//! OS keychain), and the config loader.

pub mod config;
pub mod github;
pub mod token;
