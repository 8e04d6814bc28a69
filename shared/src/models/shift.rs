//! Shift Model
//!
//! Collection happens twice a day. The tracker pins the shift the ramp
//! is currently recording against, together with the business date it
//! belongs to.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Collection shift within a business day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    #[serde(alias = "morning", alias = "MORNING")]
    Morning,
    #[serde(alias = "evening", alias = "EVENING")]
    Evening,
}

impl Shift {
    /// The shift that follows this one
    pub fn toggled(&self) -> Self {
        match self {
            Shift::Morning => Shift::Evening,
            Shift::Evening => Shift::Morning,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Evening => "Evening",
        }
    }
}

impl Default for Shift {
    fn default() -> Self {
        Shift::Morning
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse error for shift strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidShift(pub String);

impl fmt::Display for InvalidShift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid shift: {}", self.0)
    }
}

impl std::error::Error for InvalidShift {}

impl FromStr for Shift {
    type Err = InvalidShift;

    // Entry forms capitalize inconsistently, so match case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(Shift::Morning),
            "evening" => Ok(Shift::Evening),
            _ => Err(InvalidShift(s.to_string())),
        }
    }
}

/// Where collection currently stands: which shift, on which business date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTracker {
    pub current_shift: Shift,
    pub current_date: NaiveDate,
}

impl ShiftTracker {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            current_shift: Shift::Morning,
            current_date: date,
        }
    }

    /// Manual advance: flip the shift and stamp today's date
    pub fn advance(&mut self, today: NaiveDate) {
        self.current_shift = self.current_shift.toggled();
        self.current_date = today;
    }

    /// Day rollover: back to Morning on the new business date
    pub fn roll_to(&mut self, today: NaiveDate) {
        self.current_shift = Shift::Morning;
        self.current_date = today;
    }
}
