//! Request orchestration and view logic for reposcope.
//!
//! This crate defines the "ports" (forge client and token provider traits)
//! that the infrastructure layer implements, plus the pure logic that does
//! not touch the network: the view reducer and the username locator.
//! It depends only on `reposcope-types` -- never on `reposcope-infra` or
//! any HTTP/keychain crate.

pub mod forge;
pub mod locator;
pub mod service;
pub mod token;
pub mod view;
