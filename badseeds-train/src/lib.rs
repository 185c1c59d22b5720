//! Training-run assembly for the bad-seeds environments
//!
//! Assembles environment and agent from a flat hyperparameter
//! configuration, selects a device, and drives the episode loop — either
//! the bounded manual loop or the managed runner with guaranteed teardown.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod config;
pub mod device;
pub mod runner;

pub use config::{SummarizerConfig, TrainConfig};
pub use device::{select_device, Device, DeviceWarning};
pub use runner::{run_episode, run_manual, RunSummary, Runner};
