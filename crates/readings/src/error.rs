//! Reading Error Types

use crate::ReadingKind;
use thiserror::Error;

/// Errors for reading construction and validation
#[derive(Debug, Clone, Error)]
pub enum ReadingError {
    /// Value out of the category's plausible range
    #[error("{kind} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        kind: ReadingKind,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Category tag not one of hr/temp/o2
    #[error("unknown reading type tag: {0}")]
    UnknownTag(String),
}
