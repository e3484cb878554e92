//! # Availability Agent Library
//!
//! Polls the park ticketing API for reservation days that open up before a
//! target date and reports them on standard output.
//!
//! Modules:
//! - `cache` — bearer credential with its computed expiry
//! - `sources` — token exchange and availability query
//! - `filter` — facility names and the "available before target" rule
//! - `scheduler` — fixed period polling loop
//! - `config` — agent settings

pub mod config;
pub mod cache;
pub mod errors;
pub mod filter;
pub mod sources;
pub mod scheduler;
pub mod helpers;
pub mod utils;
#[cfg(test)]
mod tests;


pub use crate::errors::AgentError;
pub use crate::filter::matches::find_matches;
