//! Biometric Reading Model
//!
//! Reading categories, per-category value distributions, and synthetic
//! reading generation for seeding test databases.

mod error;
mod kind;
mod synth;
mod validate;

pub use error::ReadingError;
pub use kind::ReadingKind;
pub use synth::{Synthesizer, HISTORY_WINDOW_DAYS};
pub use validate::check_range;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single synthetic biometric data point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Measurement time (UTC)
    pub timestamp: DateTime<Utc>,
    /// Measured value in the kind's unit
    pub value: f64,
    /// Measurement category
    pub kind: ReadingKind,
}
