// Chart Domain Model

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// One day of lead generation counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub people: i64,
    pub companies: i64,
}

/// Inclusive date filter. Either bound may be open; an inverted range
/// (start after end) is legal and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Unbounded range (every row).
    pub fn all() -> Self {
        Self::default()
    }
}

/// Dashboard date range presets. All presets end on "today"; `Custom`
/// carries no span of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangePreset {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "3d")]
    ThreeDays,
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "30d")]
    ThirtyDays,
    #[serde(rename = "custom")]
    Custom,
}

impl RangePreset {
    /// Days covered, counting today. `None` for `Custom`.
    pub fn days(&self) -> Option<i64> {
        match self {
            RangePreset::OneDay => Some(1),
            RangePreset::ThreeDays => Some(3),
            RangePreset::SevenDays => Some(7),
            RangePreset::ThirtyDays => Some(30),
            RangePreset::Custom => None,
        }
    }

    /// Resolve against `today`: `1d` is [today, today], `7d` is
    /// [today-6, today], and so on. `Custom` resolves to `None`.
    pub fn resolve(&self, today: NaiveDate) -> Option<DateRange> {
        self.days().map(|days| DateRange {
            start: Some(today - Duration::days(days - 1)),
            end: Some(today),
        })
    }
}

impl std::fmt::Display for RangePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangePreset::OneDay => write!(f, "1d"),
            RangePreset::ThreeDays => write!(f, "3d"),
            RangePreset::SevenDays => write!(f, "7d"),
            RangePreset::ThirtyDays => write!(f, "30d"),
            RangePreset::Custom => write!(f, "custom"),
        }
    }
}

impl std::str::FromStr for RangePreset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1d" => Ok(RangePreset::OneDay),
            "3d" => Ok(RangePreset::ThreeDays),
            "7d" => Ok(RangePreset::SevenDays),
            "30d" => Ok(RangePreset::ThirtyDays),
            "custom" => Ok(RangePreset::Custom),
            other => Err(DomainError::UnknownPreset(other.to_string())),
        }
    }
}
