//! # Stagelight Common Library
//!
//! Shared code for the Stagelight services including:
//! - Error types and the common `Result` alias
//! - Clock abstraction for time-dependent components
//! - Timestamp utilities

pub mod error;
pub mod time;

pub use error::{Error, Result};
pub use time::{Clock, ManualClock, SystemClock};
