//! Range Checking for Generated Readings

use crate::{Reading, ReadingError};

/// Check that a reading's value lies within its category's plausible range
pub fn check_range(reading: &Reading) -> Result<(), ReadingError> {
    let (min, max) = reading.kind.plausible_range();
    if reading.value < min || reading.value > max {
        Err(ReadingError::OutOfRange {
            kind: reading.kind,
            value: reading.value,
            min,
            max,
        })
    } else {
        Ok(())
    }
}
