//! Value objects representing immutable domain concepts

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// Hour and minute of a day
///
/// Ordering is lexicographic on `(hour, minute)`, which the derive gives us
/// from the field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    /// Create a time of day, rejecting hours outside 0..=23 and minutes outside 0..=59
    pub fn new(hour: i64, minute: i64) -> DomainResult<Self> {
        if !(0..=23).contains(&hour) || !(0..=59).contains(&minute) {
            return Err(DomainError::TimeOutOfRange { hour, minute });
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Parse `H:M`. Each part must be an integer; zero padding is not required.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let parts: Vec<&str> = input.split(':').collect();
        if parts.len() != 2 {
            return Err(DomainError::MalformedTime);
        }

        let hour: i64 = parts[0]
            .parse()
            .map_err(|e: std::num::ParseIntError| DomainError::InvalidHour(e.to_string()))?;
        let minute: i64 = parts[1]
            .parse()
            .map_err(|e: std::num::ParseIntError| DomainError::InvalidMinute(e.to_string()))?;

        Self::new(hour, minute)
    }

    /// True iff `self` is strictly later in the day than `other`
    pub fn is_after(&self, other: &TimeOfDay) -> bool {
        self > other
    }

    /// Fields may be set directly, so range is re-checked on demand
    pub fn is_valid(&self) -> bool {
        self.hour <= 23 && self.minute <= 59
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// A client's preferred band of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreferenciaHoraria {
    #[serde(rename = "Mañana")]
    Manana,
    Tarde,
    Noche,
}

impl PreferenciaHoraria {
    /// Every variant, in canonical order
    pub const ALL: [PreferenciaHoraria; 3] = [
        PreferenciaHoraria::Manana,
        PreferenciaHoraria::Tarde,
        PreferenciaHoraria::Noche,
    ];

    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenciaHoraria::Manana => "Mañana",
            PreferenciaHoraria::Tarde => "Tarde",
            PreferenciaHoraria::Noche => "Noche",
        }
    }

    /// Strict parse: only the three canonical names are accepted
    pub fn parse(s: &str) -> DomainResult<Self> {
        match s {
            "Mañana" => Ok(PreferenciaHoraria::Manana),
            "Tarde" => Ok(PreferenciaHoraria::Tarde),
            "Noche" => Ok(PreferenciaHoraria::Noche),
            other => Err(DomainError::InvalidPreference(other.to_string())),
        }
    }

    /// Whether `name` is one of the canonical names
    pub fn contains(name: &str) -> bool {
        Self::ALL.iter().any(|p| p.as_str() == name)
    }

    /// Whether this value belongs to the closed set
    pub fn is_recognized(&self) -> bool {
        match self {
            PreferenciaHoraria::Manana | PreferenciaHoraria::Tarde | PreferenciaHoraria::Noche => {
                true
            }
        }
    }
}

impl fmt::Display for PreferenciaHoraria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferenciaHoraria {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
