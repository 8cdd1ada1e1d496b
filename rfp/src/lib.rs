use std::sync::LazyLock;
use std::time::Instant;

/// Pipeline configuration
pub mod config;

/// CLI, logging and output files
pub mod io;

/// Feature building, scaling, random forests, training and prediction
pub mod model;

/// Synthetic layout generation
pub mod synth;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
