//! GitHub REST API adapter.

mod client;
mod types;

pub use client::GithubClient;
