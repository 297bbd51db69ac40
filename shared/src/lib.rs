//! Shared library for InfluencerFlow contract Lambda functions.
//!
//! This crate provides the configuration, error, and HTTP plumbing used
//! across the contract-automation Lambda binaries.

pub mod config;
pub mod error;
pub mod http;

pub use config::Config;
pub use error::{Error, Result};
