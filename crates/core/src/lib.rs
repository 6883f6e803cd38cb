//! Core utilities for the interior viewer.
//!
//! This crate provides foundational types and utilities used across the viewer:
//! - Error types and result aliases
//! - Logging initialization
//! - Frame timing
//! - Configuration management

pub mod config;

mod clock;
mod error;
mod logging;

pub use clock::{FrameClock, MAX_FRAME_DELTA};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
