//! Reading Categories
//!
//! Each category carries the tag stored in the database, the parameters of
//! its value distribution, and the plausible range generated values are
//! clamped to.

use crate::ReadingError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Biometric measurement category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadingKind {
    /// Heart rate (beats per minute)
    #[serde(rename = "hr")]
    HeartRate,
    /// Skin temperature (degrees Celsius)
    #[serde(rename = "temp")]
    SkinTemp,
    /// Oxygen saturation (percent)
    #[serde(rename = "o2")]
    OxygenSat,
}

impl ReadingKind {
    /// All categories, in tag order
    pub const ALL: [ReadingKind; 3] = [
        ReadingKind::HeartRate,
        ReadingKind::SkinTemp,
        ReadingKind::OxygenSat,
    ];

    /// Tag stored in the `type` column
    pub fn tag(&self) -> &'static str {
        match self {
            ReadingKind::HeartRate => "hr",
            ReadingKind::SkinTemp => "temp",
            ReadingKind::OxygenSat => "o2",
        }
    }

    /// Parse a stored tag back into a category
    pub fn from_tag(tag: &str) -> Result<Self, ReadingError> {
        match tag {
            "hr" => Ok(ReadingKind::HeartRate),
            "temp" => Ok(ReadingKind::SkinTemp),
            "o2" => Ok(ReadingKind::OxygenSat),
            other => Err(ReadingError::UnknownTag(other.to_string())),
        }
    }

    /// Mean of the category's value distribution
    pub fn mean(&self) -> f64 {
        match self {
            ReadingKind::HeartRate => 75.0,
            ReadingKind::SkinTemp => 33.5,
            ReadingKind::OxygenSat => 97.0,
        }
    }

    /// Standard deviation of the category's value distribution
    pub fn std_dev(&self) -> f64 {
        match self {
            ReadingKind::HeartRate => 8.0,
            ReadingKind::SkinTemp => 1.2,
            ReadingKind::OxygenSat => 1.5,
        }
    }

    /// Plausible (min, max) range generated values are clamped to
    pub fn plausible_range(&self) -> (f64, f64) {
        match self {
            ReadingKind::HeartRate => (30.0, 200.0),
            ReadingKind::SkinTemp => (20.0, 45.0),
            ReadingKind::OxygenSat => (50.0, 100.0),
        }
    }

    /// Clamp a raw sample into the plausible range
    pub fn clamp(&self, value: f64) -> f64 {
        let (min, max) = self.plausible_range();
        value.clamp(min, max)
    }
}

impl fmt::Display for ReadingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        for kind in ReadingKind::ALL {
            assert_eq!(ReadingKind::from_tag(kind.tag()).unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert!(matches!(
            ReadingKind::from_tag("bp"),
            Err(ReadingError::UnknownTag(_))
        ));
    }

    #[test]
    fn test_clamp_bounds() {
        let hr = ReadingKind::HeartRate;
        assert_eq!(hr.clamp(500.0), 200.0);
        assert_eq!(hr.clamp(-10.0), 30.0);
        assert_eq!(hr.clamp(75.0), 75.0);
    }

    #[test]
    fn test_mean_within_range() {
        for kind in ReadingKind::ALL {
            let (min, max) = kind.plausible_range();
            assert!(kind.mean() > min && kind.mean() < max);
        }
    }
}
