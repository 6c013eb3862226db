use chrono::Datelike;
use tracing::debug;

use crate::error::{AmedasError, Result};
use crate::models::record::WeatherRecord;
use crate::models::station::Station;
use crate::models::window::{DateWindow, Granularity};
use crate::processors::cleaner::clean_table;
use crate::processors::columns::select_columns;
use crate::sources::table::TableSource;
use crate::utils::constants::{FEBRUARY_NORMAL_DAYS, PENTADS_PER_MONTH, PENTADS_PER_YEAR};

/// Pentad index of a day of month: five-day buckets, with the month-end
/// remainder (day 31) folded into the sixth.
pub fn pentad_of_day(day: u32) -> u32 {
    if day <= 30 {
        (day - 1) / 5 + 1
    } else {
        6
    }
}

/// Turns a date window into the page fetches it needs and slices the
/// concatenated result back down to the window.
///
/// The fetch year is a parameter so the same window shape can be replayed
/// against earlier years when building climatological normals.
pub struct PeriodResampler<'a> {
    source: &'a dyn TableSource,
}

impl<'a> PeriodResampler<'a> {
    pub fn new(source: &'a dyn TableSource) -> Self {
        Self { source }
    }

    /// Daily records for `window`, fetched from `fetch_year` (and the year
    /// after, when the window crosses December).
    pub fn fetch_daily(
        &self,
        station: &Station,
        window: &DateWindow,
        fetch_year: i32,
    ) -> Result<Vec<WeatherRecord>> {
        let begin = window.begin;
        let end = window.end;

        let mut rows = Vec::new();
        if begin.year() == end.year() {
            for month in begin.month()..=end.month() {
                rows.extend(self.month_records(station, fetch_year, month)?);
            }
        } else {
            for month in begin.month()..=12 {
                rows.extend(self.month_records(station, fetch_year, month)?);
            }
            for month in 1..=end.month() {
                rows.extend(self.month_records(station, fetch_year + 1, month)?);
            }
        }

        let offset = (begin.day() - 1) as usize;
        let take = window.days() as usize;
        if rows.len() < offset + take {
            return Err(AmedasError::source_shape(
                daily_period(station, fetch_year, begin.month()),
                format!(
                    "concatenated table has {} rows, need {} from offset {}",
                    rows.len(),
                    take,
                    offset
                ),
            ));
        }
        Ok(rows[offset..offset + take].to_vec())
    }

    /// Pentad records for `window`, fetched from whole-year pages.
    pub fn fetch_pentad(
        &self,
        station: &Station,
        window: &DateWindow,
        fetch_year: i32,
    ) -> Result<Vec<WeatherRecord>> {
        let begin = window.begin;
        let end = window.end;

        let mut rows = self.year_records(station, fetch_year)?;
        if begin.year() != end.year() {
            rows.extend(self.year_records(station, fetch_year + 1)?);
        }

        let start =
            (begin.month() as usize - 1) * PENTADS_PER_MONTH + pentad_of_day(begin.day()) as usize
                - 1;
        let stop = rows.len() + pentad_of_day(end.day()) as usize
            - (13 - end.month() as usize) * PENTADS_PER_MONTH;
        if start >= stop || stop > rows.len() {
            return Err(AmedasError::source_shape(
                pentad_period(station, fetch_year),
                format!("pentad slice {}..{} outside {} rows", start, stop, rows.len()),
            ));
        }
        Ok(rows[start..stop].to_vec())
    }

    fn month_records(
        &self,
        station: &Station,
        year: i32,
        month: u32,
    ) -> Result<Vec<WeatherRecord>> {
        let period = daily_period(station, year, month);
        debug!(station = station.name, %period, "fetching daily page");

        let raw = self
            .source
            .fetch_table(station.site_code, year, month, Granularity::Daily)?;
        let cleaned = clean_table(&raw, &period)?;
        let selected = select_columns(&cleaned, station.layout, Granularity::Daily, &period)?;

        let mut records: Vec<WeatherRecord> =
            selected.into_iter().map(WeatherRecord::from_cells).collect();
        if month == 2 {
            // Normals use a fixed 28-day February; a leap day is dropped
            records.truncate(FEBRUARY_NORMAL_DAYS);
        }
        Ok(records)
    }

    fn year_records(&self, station: &Station, year: i32) -> Result<Vec<WeatherRecord>> {
        let period = pentad_period(station, year);
        debug!(station = station.name, %period, "fetching pentad page");

        let raw = self
            .source
            .fetch_table(station.site_code, year, 1, Granularity::Pentad)?;
        let cleaned = clean_table(&raw, &period)?;
        let selected = select_columns(&cleaned, station.layout, Granularity::Pentad, &period)?;

        if selected.len() != PENTADS_PER_YEAR {
            return Err(AmedasError::source_shape(
                period,
                format!(
                    "expected {} pentad rows, found {}",
                    PENTADS_PER_YEAR,
                    selected.len()
                ),
            ));
        }
        Ok(selected.into_iter().map(WeatherRecord::from_cells).collect())
    }
}

fn daily_period(station: &Station, year: i32, month: u32) -> String {
    format!(
        "{} ({}) {}-{:02} daily",
        station.name, station.site_code, year, month
    )
}

fn pentad_period(station: &Station, year: i32) -> String {
    format!("{} ({}) {} pentad", station.name, station.site_code, year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::station::ColumnLayout;
    use crate::sources::table::RawTable;
    use chrono::NaiveDate;

    const TEST_STATION: Station = Station {
        name: "test",
        site_code: "0242",
        layout: ColumnLayout::Amedas,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn days_in_month(year: i32, month: u32) -> u32 {
        let next = if month == 12 {
            date(year + 1, 1, 1)
        } else {
            date(year, month + 1, 1)
        };
        (next - date(year, month, 1)).num_days() as u32
    }

    /// Emits synthetic pages wide enough for the AMeDAS layouts. Daily cells
    /// encode `month * 100 + day`, pentad cells encode the pentad ordinal,
    /// both offset by `year_bias * 1000` so years are distinguishable.
    struct FakeSource {
        year_bias: bool,
    }

    impl FakeSource {
        fn value(&self, year: i32, base: u32) -> String {
            let bias = if self.year_bias { year as u32 * 1000 } else { 0 };
            format!("{}", bias + base)
        }
    }

    impl TableSource for FakeSource {
        fn fetch_table(
            &self,
            _site_code: &str,
            year: i32,
            month: u32,
            granularity: Granularity,
        ) -> Result<RawTable> {
            let rows = match granularity {
                Granularity::Daily => (1..=days_in_month(year, month))
                    .map(|day| vec![self.value(year, month * 100 + day); 16])
                    .collect(),
                Granularity::Pentad => (1..=PENTADS_PER_YEAR as u32)
                    .map(|pentad| vec![self.value(year, pentad); 20])
                    .collect(),
            };
            Ok(RawTable::new(rows))
        }
    }

    /// Always fails, to check fail-fast propagation.
    struct BrokenSource;

    impl TableSource for BrokenSource {
        fn fetch_table(&self, _: &str, year: i32, month: u32, _: Granularity) -> Result<RawTable> {
            Err(AmedasError::fetch(
                format!("{}-{:02}", year, month),
                "connection refused",
            ))
        }
    }

    #[test]
    fn test_pentad_of_day() {
        assert_eq!(pentad_of_day(1), 1);
        assert_eq!(pentad_of_day(5), 1);
        assert_eq!(pentad_of_day(6), 2);
        assert_eq!(pentad_of_day(25), 5);
        assert_eq!(pentad_of_day(30), 6);
        assert_eq!(pentad_of_day(31), 6);
    }

    #[test]
    fn test_daily_within_one_month() {
        let source = FakeSource { year_bias: false };
        let resampler = PeriodResampler::new(&source);
        let window = DateWindow::new(date(2025, 4, 10), date(2025, 4, 12)).unwrap();

        let records = resampler.fetch_daily(&TEST_STATION, &window, 2025).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].mean_temp, Some(410.0));
        assert_eq!(records[2].mean_temp, Some(412.0));
    }

    #[test]
    fn test_daily_across_months() {
        let source = FakeSource { year_bias: false };
        let resampler = PeriodResampler::new(&source);
        let window = DateWindow::new(date(2025, 4, 29), date(2025, 5, 2)).unwrap();

        let records = resampler.fetch_daily(&TEST_STATION, &window, 2025).unwrap();
        let means: Vec<Option<f64>> = records.iter().map(|r| r.mean_temp).collect();
        assert_eq!(
            means,
            vec![Some(429.0), Some(430.0), Some(501.0), Some(502.0)]
        );
    }

    #[test]
    fn test_daily_across_year_boundary() {
        let source = FakeSource { year_bias: true };
        let resampler = PeriodResampler::new(&source);
        let window = DateWindow::new(date(2025, 12, 30), date(2026, 1, 2)).unwrap();

        let records = resampler.fetch_daily(&TEST_STATION, &window, 2025).unwrap();
        let means: Vec<Option<f64>> = records.iter().map(|r| r.mean_temp).collect();
        assert_eq!(
            means,
            vec![
                Some(2025.0 * 1000.0 + 1230.0),
                Some(2025.0 * 1000.0 + 1231.0),
                Some(2026.0 * 1000.0 + 101.0),
                Some(2026.0 * 1000.0 + 102.0),
            ]
        );
    }

    #[test]
    fn test_leap_february_truncated() {
        let source = FakeSource { year_bias: false };
        let resampler = PeriodResampler::new(&source);
        // 2024 is a leap year; the page emits 29 rows but day 29 is dropped,
        // so a window spanning the leap day runs one source row into March
        let window = DateWindow::new(date(2024, 2, 25), date(2024, 3, 1)).unwrap();

        let records = resampler.fetch_daily(&TEST_STATION, &window, 2024).unwrap();
        let means: Vec<Option<f64>> = records.iter().map(|r| r.mean_temp).collect();
        assert_eq!(
            means,
            vec![
                Some(225.0),
                Some(226.0),
                Some(227.0),
                Some(228.0),
                Some(301.0),
                Some(302.0),
            ]
        );
    }

    #[test]
    fn test_fetch_failure_fails_whole_call() {
        let resampler = PeriodResampler::new(&BrokenSource);
        let window = DateWindow::new(date(2025, 4, 1), date(2025, 5, 31)).unwrap();

        let result = resampler.fetch_daily(&TEST_STATION, &window, 2025);
        assert!(matches!(result, Err(AmedasError::Fetch { .. })));
    }

    #[test]
    fn test_pentad_single_year_slice() {
        let source = FakeSource { year_bias: false };
        let resampler = PeriodResampler::new(&source);
        // Feb 2 is pentad 7 of the year, Mar 3 is pentad 13
        let window = DateWindow::new(date(2025, 2, 2), date(2025, 3, 3)).unwrap();

        let records = resampler.fetch_pentad(&TEST_STATION, &window, 2025).unwrap();
        let means: Vec<Option<f64>> = records.iter().map(|r| r.mean_temp).collect();
        assert_eq!(
            means,
            (7..=13).map(|p| Some(f64::from(p))).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_pentad_across_year_boundary() {
        let source = FakeSource { year_bias: true };
        let resampler = PeriodResampler::new(&source);
        let window = DateWindow::new(date(2025, 12, 20), date(2026, 1, 8)).unwrap();

        let records = resampler.fetch_pentad(&TEST_STATION, &window, 2025).unwrap();
        let means: Vec<Option<f64>> = records.iter().map(|r| r.mean_temp).collect();
        assert_eq!(
            means,
            vec![
                Some(2025.0 * 1000.0 + 70.0),
                Some(2025.0 * 1000.0 + 71.0),
                Some(2025.0 * 1000.0 + 72.0),
                Some(2026.0 * 1000.0 + 1.0),
                Some(2026.0 * 1000.0 + 2.0),
            ]
        );
    }

    #[test]
    fn test_pentad_page_with_wrong_row_count_rejected() {
        struct ShortYear;
        impl TableSource for ShortYear {
            fn fetch_table(&self, _: &str, _: i32, _: u32, _: Granularity) -> Result<RawTable> {
                Ok(RawTable::new(
                    (1..=40).map(|p| vec![p.to_string(); 20]).collect(),
                ))
            }
        }

        let resampler = PeriodResampler::new(&ShortYear);
        let window = DateWindow::new(date(2025, 2, 2), date(2025, 3, 3)).unwrap();

        let result = resampler.fetch_pentad(&TEST_STATION, &window, 2025);
        assert!(matches!(result, Err(AmedasError::SourceShape { .. })));
    }
}
