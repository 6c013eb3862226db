use chrono::{Datelike, Local, NaiveDate};
use tracing::info;

use crate::error::{AmedasError, Result};
use crate::models::series::WeatherSeries;
use crate::models::station::Station;
use crate::models::window::{DateWindow, Granularity};
use crate::processors::averager::average_years;
use crate::processors::resampler::{pentad_of_day, PeriodResampler};
use crate::sources::table::TableSource;
use crate::utils::constants::{PENTADS_PER_MONTH, PENTADS_PER_YEAR};

/// Multi-year history: clamp a window, replay it against each of the last
/// `n_years` years, and average the stack into one labelled series.
///
/// This is the machinery behind both past-observed and
/// climatological-normal segments; with `n_years` of 1 it degenerates to a
/// plain single-year fetch.
pub struct HistoryFetcher<'a> {
    source: &'a dyn TableSource,
    today: NaiveDate,
}

impl<'a> HistoryFetcher<'a> {
    pub fn new(source: &'a dyn TableSource) -> Self {
        Self {
            source,
            today: Local::now().date_naive(),
        }
    }

    /// Override the reference date; fetches never reach past the day before
    /// it.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn fetch(
        &self,
        station: &Station,
        window: DateWindow,
        n_years: usize,
        granularity: Granularity,
    ) -> Result<WeatherSeries> {
        if n_years == 0 {
            return Err(AmedasError::InvalidWindow(
                "n_years must be at least 1".to_string(),
            ));
        }

        let window = window.clamped(self.today, granularity);
        info!(
            station = station.name,
            begin = %window.begin,
            end = %window.end,
            n_years,
            "fetching history"
        );

        let resampler = PeriodResampler::new(self.source);
        let first_year = window.begin.year() + 1 - n_years as i32;
        let mut years = Vec::with_capacity(n_years);
        for year in first_year..=window.begin.year() {
            let records = match granularity {
                Granularity::Daily => resampler.fetch_daily(station, &window, year)?,
                Granularity::Pentad => resampler.fetch_pentad(station, &window, year)?,
            };
            years.push(records);
        }

        let averaged = average_years(&years)?;
        let labels = match granularity {
            Granularity::Daily => window
                .iter_dates()
                .map(|d| d.format("%m/%d").to_string())
                .collect(),
            Granularity::Pentad => pentad_labels(&window, averaged.len()),
        };
        WeatherSeries::new(labels, averaged)
    }
}

/// Pentad-of-year ordinals for the window, wrapping at year end.
fn pentad_labels(window: &DateWindow, count: usize) -> Vec<String> {
    let start = (window.begin.month() as usize - 1) * PENTADS_PER_MONTH
        + pentad_of_day(window.begin.day()) as usize;
    (0..count)
        .map(|offset| (((start - 1 + offset) % PENTADS_PER_YEAR) + 1).to_string())
        .collect()
}
