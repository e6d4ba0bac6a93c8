//! Week identity
//!
//! ISO-8601 calendar weeks and the per-week order container.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::orders::Order;

/// One ISO-8601 calendar week.
///
/// Ordered by year first, then week number; equal years compare by week
/// alone. Week numbers run 1 through 53. Whether a given week 53 actually
/// exists is a property of the year and is resolved by the calendar
/// conversions in [`crate::schedule`], not at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WeekIdentifier {
    /// ISO week-numbering year. Differs from the civil year for dates that
    /// fall in the last or first ISO week of a neighbouring year.
    pub year: i16,

    /// ISO week of year, 1 through 53.
    pub week: i8,
}

impl WeekIdentifier {
    /// Creates a week identifier from its components.
    #[must_use]
    pub const fn new(year: i16, week: i8) -> Self {
        Self { year, week }
    }
}

impl fmt::Display for WeekIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.year, self.week)
    }
}

/// Errors related to parsing a week identifier from text.
#[derive(Debug, Error)]
pub enum ParseWeekError {
    /// The `-W` separator between year and week was missing.
    #[error("week identifier must look like 2025-W45")]
    MissingSeparator,

    /// The year or week digits failed to parse.
    #[error("invalid digits in week identifier")]
    Digits(#[from] std::num::ParseIntError),

    /// The week number lies outside the ISO range.
    #[error("week number {0} is outside 1..=53")]
    WeekOutOfRange(i8),
}

impl FromStr for WeekIdentifier {
    type Err = ParseWeekError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (year, week) = value
            .rsplit_once("-W")
            .ok_or(ParseWeekError::MissingSeparator)?;

        let year: i16 = year.parse()?;
        let week: i8 = week.parse()?;

        if !(1..=53).contains(&week) {
            return Err(ParseWeekError::WeekOutOfRange(week));
        }

        Ok(Self { year, week })
    }
}

/// Everything ordered for one calendar week.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekOrders {
    /// The week the orders belong to.
    pub week: WeekIdentifier,

    /// Orders placed for that week, in placement order.
    pub orders: Vec<Order>,
}
