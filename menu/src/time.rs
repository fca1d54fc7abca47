//! HH:mm times, the order window, and shift classification.
//!
//! Pickup times are minute-granularity times of day. The order window gates
//! whether an order may be placed at all; the day shift only classifies an
//! order as DAY or NIGHT for an advisory banner.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid time {input:?}, expected HH:mm")]
pub struct ParseTimeError {
    pub input: String,
}

/// Minute-granularity time of day, stored as minutes past midnight.
/// Serialized as an "HH:mm" string on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub fn new(hours: u16, minutes: u16) -> Option<Self> {
        if hours < 24 && minutes < 60 {
            Some(Self(hours * 60 + minutes))
        } else {
            None
        }
    }

    pub fn minutes_past_midnight(self) -> u16 {
        self.0
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseTimeError {
            input: s.to_string(),
        };

        let (hours, minutes) = s.split_once(':').ok_or_else(invalid)?;
        let hours: u16 = hours.parse().map_err(|_| invalid())?;
        let minutes: u16 = minutes.parse().map_err(|_| invalid())?;

        TimeOfDay::new(hours, minutes).ok_or_else(invalid)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ParseTimeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> String {
        t.to_string()
    }
}

/// Inclusive time range, both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: TimeOfDay,
    pub to: TimeOfDay,
}

impl TimeRange {
    pub fn contains(&self, t: TimeOfDay) -> bool {
        self.from <= t && t <= self.to
    }
}

/// Operating hours as served by `GET /config/order-windows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderWindows {
    pub order_window: TimeRange,
    pub day_shift: TimeRange,
}

/// Advisory time-of-day bracket. NIGHT is the complement of the day shift
/// and only triggers a non-blocking notice, never a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shift {
    Day,
    Night,
}

impl Shift {
    pub fn classify(pickup: TimeOfDay, day_shift: TimeRange) -> Shift {
        if day_shift.contains(pickup) {
            Shift::Day
        } else {
            Shift::Night
        }
    }
}
