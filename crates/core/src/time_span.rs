//! Wall-clock times (`"HH:MM"`) and the overnight-aware spans built from them.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::Fecha;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day with minute precision, serialized as `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HoraDia(NaiveTime);

impl HoraDia {
    /// Build from hour and minute. Returns `None` for out-of-range values.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(HoraDia)
    }

    pub fn as_naive(self) -> NaiveTime {
        self.0
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_from_midnight(self) -> u32 {
        self.0.hour() * 60 + self.0.minute()
    }
}

impl fmt::Display for HoraDia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid time of day '{0}', expected HH:MM")]
pub struct ParseHoraError(String);

impl FromStr for HoraDia {
    type Err = ParseHoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // Seconds are tolerated on input and dropped.
        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .ok()
            .and_then(|t| HoraDia::from_hm(t.hour(), t.minute()))
            .ok_or_else(|| ParseHoraError(s.to_string()))
    }
}

impl Serialize for HoraDia {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HoraDia {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A start/end pair of wall-clock times on a given day.
///
/// An end earlier than the start means the span crosses midnight and ends
/// on the following day. Equal times are a zero-length span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpan {
    pub inicio: HoraDia,
    pub fin: HoraDia,
}

impl TimeSpan {
    pub fn new(inicio: HoraDia, fin: HoraDia) -> Self {
        Self { inicio, fin }
    }

    pub fn crosses_midnight(&self) -> bool {
        self.fin < self.inicio
    }

    pub fn duration_minutes(&self) -> u32 {
        let start = self.inicio.minutes_from_midnight();
        let end = self.fin.minutes_from_midnight();
        if end >= start {
            end - start
        } else {
            MINUTES_PER_DAY - start + end
        }
    }

    /// Duration in fractional hours. Exact for any whole number of minutes
    /// divisible by 15; otherwise subject to ordinary `f64` rounding.
    pub fn hours(&self) -> f64 {
        f64::from(self.duration_minutes()) / 60.0
    }

    /// The instant the span begins on `fecha`.
    pub fn start_on(&self, fecha: Fecha) -> NaiveDateTime {
        fecha.and_time(self.inicio.as_naive())
    }
}
