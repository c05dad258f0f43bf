//! Token storage backends.
//!
//! - `env`: environment variable provider (read-only, highest priority)
//! - `keychain`: OS keychain provider (the persisted store)
//! - `chain`: chain builder wiring providers in precedence order

pub mod chain;
pub mod env;
pub mod keychain;
