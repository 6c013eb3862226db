use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{AmedasError, Result};
use crate::utils::constants::{CLAMPED_SPAN_DAYS, MAX_WINDOW_SPAN_DAYS, PENTAD_DAYS};

/// Reporting granularity of a fetched series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    Daily,
    Pentad,
}

impl Granularity {
    pub fn is_daily(&self) -> bool {
        matches!(self, Granularity::Daily)
    }
}

/// A closed interval of calendar dates.
///
/// Invariant: begin <= end, enforced at construction. Internal producers may
/// build literals where the ordering is already established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub begin: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(begin: NaiveDate, end: NaiveDate) -> Result<Self> {
        if begin > end {
            return Err(AmedasError::InvalidWindow(format!(
                "begin {} is after end {}",
                begin, end
            )));
        }
        Ok(Self { begin, end })
    }

    pub fn from_begin_and_length(begin: NaiveDate, length: u32) -> Result<Self> {
        if length == 0 {
            return Err(AmedasError::InvalidWindow(
                "length must be at least 1 day".to_string(),
            ));
        }
        Ok(Self {
            begin,
            end: begin + Duration::days(i64::from(length) - 1),
        })
    }

    /// Number of calendar days covered, inclusive of both ends.
    pub fn days(&self) -> i64 {
        (self.end - self.begin).num_days() + 1
    }

    /// Cut an oversized span down to one year.
    pub fn limit_span(&self) -> Self {
        if (self.end - self.begin).num_days() >= MAX_WINDOW_SPAN_DAYS {
            warn!(begin = %self.begin, end = %self.end, "window span cut to one year");
            return Self {
                begin: self.begin,
                end: self.begin + Duration::days(CLAMPED_SPAN_DAYS),
            };
        }
        *self
    }

    /// Clamp a fetch window against `today`.
    ///
    /// Observation pages exist through yesterday only, and a span of 367
    /// days or more is cut to one year. At pentad granularity the end also
    /// retreats to the last completed pentad, since the current bucket is
    /// still accumulating.
    pub fn clamped(&self, today: NaiveDate, granularity: Granularity) -> Self {
        let mut begin = self.begin;
        let mut end = self.end;

        if end >= today {
            end = today - Duration::days(1);
        }
        if begin > end {
            begin = end;
        }
        if (end - begin).num_days() >= MAX_WINDOW_SPAN_DAYS {
            end = begin + Duration::days(CLAMPED_SPAN_DAYS);
        }

        if granularity == Granularity::Pentad && (today - end).num_days() < PENTAD_DAYS {
            let back = match i64::from(today.day()) % PENTAD_DAYS {
                0 => PENTAD_DAYS,
                d => d,
            };
            end = today - Duration::days(back);
            if begin > end {
                begin = end;
            }
        }

        if begin != self.begin || end != self.end {
            warn!(
                begin = %begin,
                end = %end,
                requested_begin = %self.begin,
                requested_end = %self.end,
                "fetch window clamped"
            );
        }
        Self { begin, end }
    }

    /// The same month/day window one calendar year earlier.
    ///
    /// Feb 29 lands on Feb 28 when the earlier year is not a leap year.
    pub fn shifted_back_one_year(&self) -> Self {
        Self {
            begin: shift_year(self.begin, -1),
            end: shift_year(self.end, -1),
        }
    }

    pub fn iter_dates(&self) -> impl Iterator<Item = NaiveDate> {
        let begin = self.begin;
        (0..self.days()).map(move |offset| begin + Duration::days(offset))
    }
}

fn shift_year(date: NaiveDate, years: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year() + years, date.month(), date.day()).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(date.year() + years, 2, 28).expect("Feb 28 exists in every year")
    })
}
