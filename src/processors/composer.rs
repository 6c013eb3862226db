use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AmedasError, Result};
use crate::models::record::WeatherRecord;
use crate::models::series::WeatherSeries;
use crate::models::station::{City, Station};
use crate::models::window::{DateWindow, Granularity};
use crate::processors::history::HistoryFetcher;
use crate::sources::forecast::ForecastSource;
use crate::sources::table::TableSource;
use crate::utils::constants::FORECAST_HORIZON_DAYS;

/// Which source serves a sub-range of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentKind {
    Past,
    Forecast,
    Normal,
}

/// One contiguous sub-range of a request, tagged with its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub window: DateWindow,
}

/// The ordered segments covering a request, gap-free and overlap-free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentPlan {
    pub segments: Vec<Segment>,
}

impl SegmentPlan {
    pub fn kinds(&self) -> Vec<SegmentKind> {
        self.segments.iter().map(|s| s.kind).collect()
    }
}

fn segment(kind: SegmentKind, begin: NaiveDate, end: NaiveDate) -> Segment {
    Segment {
        kind,
        window: DateWindow { begin, end },
    }
}

/// Classify a request window against `today` into its source segments.
///
/// Yesterday is the last day with confirmed observations; the forecast
/// covers lead days 1..=14 (today through today+13); anything later falls
/// back to climatological normals. The boundary comparisons are exact — a
/// request ending precisely on yesterday or on the horizon lands in one
/// segment, never two.
pub fn classify(window: &DateWindow, today: NaiveDate) -> SegmentPlan {
    let yesterday = today - Duration::days(1);
    let horizon = today + Duration::days(FORECAST_HORIZON_DAYS - 1);
    let beyond = today + Duration::days(FORECAST_HORIZON_DAYS);
    let begin = window.begin;
    let end = window.end;

    let segments = if end <= yesterday {
        vec![segment(SegmentKind::Past, begin, end)]
    } else if begin <= yesterday && end <= horizon {
        vec![
            segment(SegmentKind::Past, begin, yesterday),
            segment(SegmentKind::Forecast, today, end),
        ]
    } else if begin <= yesterday {
        vec![
            segment(SegmentKind::Past, begin, yesterday),
            segment(SegmentKind::Forecast, today, horizon),
            segment(SegmentKind::Normal, beyond, end),
        ]
    } else if begin <= horizon && end <= horizon {
        vec![segment(SegmentKind::Forecast, begin, end)]
    } else if begin <= horizon {
        vec![
            segment(SegmentKind::Forecast, begin, horizon),
            segment(SegmentKind::Normal, beyond, end),
        ]
    } else {
        vec![segment(SegmentKind::Normal, begin, end)]
    };
    SegmentPlan { segments }
}

/// Assembles one continuous daily series for a request, stitching past
/// observations, forecast days and climatological normals in chronological
/// order.
pub struct SeriesComposer<'a> {
    tables: &'a dyn TableSource,
    forecast: &'a dyn ForecastSource,
    today: NaiveDate,
}

impl<'a> SeriesComposer<'a> {
    pub fn new(tables: &'a dyn TableSource, forecast: &'a dyn ForecastSource) -> Self {
        Self {
            tables,
            forecast,
            today: Local::now().date_naive(),
        }
    }

    /// Override the reference date, for reproducible runs and tests.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Compose `length` days starting at `begin` for a station, averaging
    /// `n_years` years into any normal-filled days.
    ///
    /// Past and normal days carry all five quantities; forecast days carry
    /// temperatures only. Labels are full `YYYY/MM/DD` dates regardless of
    /// which source produced the value.
    pub fn compose(
        &self,
        station_name: &str,
        city_name: &str,
        begin: NaiveDate,
        length: u32,
        n_years: usize,
    ) -> Result<WeatherSeries> {
        let station = Station::lookup(station_name)?;
        let city = City::lookup(city_name)?;
        let window = DateWindow::from_begin_and_length(begin, length)?.limit_span();
        let plan = classify(&window, self.today);
        info!(
            station = station.name,
            city = city.name,
            begin = %window.begin,
            end = %window.end,
            segments = plan.segments.len(),
            "composing series"
        );

        let history = HistoryFetcher::new(self.tables).with_today(self.today);
        let yesterday = self.today - Duration::days(1);

        let mut records: Vec<WeatherRecord> = Vec::with_capacity(window.days() as usize);
        for seg in &plan.segments {
            match seg.kind {
                SegmentKind::Past => {
                    let series = history.fetch(station, seg.window, 1, Granularity::Daily)?;
                    records.extend(series.into_records());
                }
                SegmentKind::Forecast => {
                    records.extend(self.forecast_records(city, &seg.window, yesterday)?);
                }
                SegmentKind::Normal => {
                    let shifted = seg.window.shifted_back_one_year();
                    let series = history.fetch(station, shifted, n_years, Granularity::Daily)?;
                    records.extend(series.into_records());
                }
            }
        }

        if records.len() as i64 != window.days() {
            return Err(AmedasError::ShapeMismatch(format!(
                "composed {} records for a {}-day window",
                records.len(),
                window.days()
            )));
        }
        let labels = window
            .iter_dates()
            .map(|d| d.format("%Y/%m/%d").to_string())
            .collect();
        WeatherSeries::new(labels, records)
    }

    fn forecast_records(
        &self,
        city: &City,
        window: &DateWindow,
        yesterday: NaiveDate,
    ) -> Result<Vec<WeatherRecord>> {
        let first_lead = (window.begin - yesterday).num_days();
        let last_lead = (window.end - yesterday).num_days();
        if last_lead > FORECAST_HORIZON_DAYS {
            return Err(AmedasError::HorizonExceeded {
                requested: last_lead,
                horizon: FORECAST_HORIZON_DAYS,
            });
        }

        let days = self
            .forecast
            .fetch_forecast(city, first_lead as u32, last_lead as u32)?;
        if days.len() as i64 != window.days() {
            return Err(AmedasError::fetch(
                format!("{} forecast leads {}..{}", city.name, first_lead, last_lead),
                format!("expected {} days, got {}", window.days(), days.len()),
            ));
        }
        Ok(days.iter().map(|day| day.to_record()).collect())
    }
}
