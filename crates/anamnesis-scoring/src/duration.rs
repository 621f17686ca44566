use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const DAYS_PER_YEAR: u64 = 365;
pub const DAYS_PER_MONTH: u64 = 30;

/// How long a complaint has been present, as captured in the form.
///
/// Components are kept as entered text so a blank field stays blank. The
/// day count is an approximation (365-day years, 30-day months) and is only
/// meant for ordering complaints against each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Duration {
    pub years: String,
    pub months: String,
    pub days: String,
}

/// One of the three duration fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DurationUnit {
    Years,
    Months,
    Days,
}

impl Duration {
    pub fn new(years: u64, months: u64, days: u64) -> Self {
        Self {
            years: years.to_string(),
            months: months.to_string(),
            days: days.to_string(),
        }
    }

    pub fn years(&self) -> u64 {
        parse_count(&self.years)
    }

    pub fn months(&self) -> u64 {
        parse_count(&self.months)
    }

    pub fn days(&self) -> u64 {
        parse_count(&self.days)
    }

    pub fn total_days(&self) -> u64 {
        days_from_parts(self.years(), self.months(), self.days())
    }

    pub fn is_zero(&self) -> bool {
        self.total_days() == 0
    }

    pub fn field(&self, unit: DurationUnit) -> &str {
        match unit {
            DurationUnit::Years => &self.years,
            DurationUnit::Months => &self.months,
            DurationUnit::Days => &self.days,
        }
    }

    /// Return a copy with one field replaced.
    pub fn with_field(&self, unit: DurationUnit, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        match unit {
            DurationUnit::Years => next.years = value.into(),
            DurationUnit::Months => next.months = value.into(),
            DurationUnit::Days => next.days = value.into(),
        }
        next
    }

    /// Human-readable form, e.g. `1 year, 2 months, 3 days`. Zero components
    /// are omitted; an all-zero duration describes as an empty string.
    pub fn describe(&self) -> String {
        [
            (self.years(), "year"),
            (self.months(), "month"),
            (self.days(), "day"),
        ]
        .into_iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| {
            if n > 1 {
                format!("{n} {unit}s")
            } else {
                format!("{n} {unit}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// `years × 365 + months × 30 + days`, saturating at `u64::MAX`.
pub fn days_from_parts(years: u64, months: u64, days: u64) -> u64 {
    years
        .saturating_mul(DAYS_PER_YEAR)
        .saturating_add(months.saturating_mul(DAYS_PER_MONTH))
        .saturating_add(days)
}

/// Parse a captured count. Surrounding whitespace is ignored; anything that
/// is not a plain run of ASCII digits (empty, signed, decimal, mixed text)
/// counts as 0. Values too large for `u64` saturate.
pub fn parse_count(text: &str) -> u64 {
    let digits = text.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}

/// Keep only ASCII digits. Applied when numeric form fields are captured.
pub fn sanitize_digits(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}
