//! optval Test Harness - Law checking and benchmarking support
//!
//! This crate provides:
//! - Call probes for observing caller-supplied functions
//! - A randomized law checker covering sync and async combinators
//! - Test logging setup

pub mod probe;
pub mod laws;
pub mod logging;

pub use probe::*;
pub use laws::*;
pub use logging::*;

use thiserror::Error;

/// Harness setup errors
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Runtime setup failed: {0}")]
    Runtime(#[from] std::io::Error),
}
