use std::path::PathBuf;

use crate::error::{AmedasError, Result};
use crate::models::station::City;
use crate::sources::forecast::{ForecastDay, ForecastSource};

/// File-backed [`ForecastSource`]: one `lead,max,min` row per lead day, in
/// any order, as saved from a forecast page scrape.
pub struct CsvForecastSource {
    path: PathBuf,
}

impl CsvForecastSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Vec<(u32, ForecastDay)>> {
        let period = self.path.display().to_string();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| AmedasError::fetch(period.as_str(), e.to_string()))?;

        let mut days = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| AmedasError::fetch(period.as_str(), e.to_string()))?;
            if record.len() < 3 {
                return Err(AmedasError::fetch(
                    period.as_str(),
                    format!("forecast row has {} fields, need 3", record.len()),
                ));
            }
            let lead: u32 = record[0].trim().parse().map_err(|_| {
                AmedasError::fetch(period.as_str(), format!("bad lead day {:?}", &record[0]))
            })?;
            let max_temp = parse_field(&record[1], "max temperature", &period)?;
            let min_temp = parse_field(&record[2], "min temperature", &period)?;
            days.push((lead, ForecastDay::new(max_temp, min_temp)));
        }
        Ok(days)
    }
}

fn parse_field(raw: &str, what: &str, period: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AmedasError::fetch(period, format!("bad {} {:?}", what, raw)))
}

impl ForecastSource for CsvForecastSource {
    fn fetch_forecast(
        &self,
        _city: &City,
        first_lead: u32,
        last_lead: u32,
    ) -> Result<Vec<ForecastDay>> {
        let days = self.load()?;
        let period = self.path.display().to_string();
        (first_lead..=last_lead)
            .map(|lead| {
                days.iter()
                    .find(|(l, _)| *l == lead)
                    .map(|(_, day)| *day)
                    .ok_or_else(|| {
                        AmedasError::fetch(
                            period.as_str(),
                            format!("no forecast row for lead day {}", lead),
                        )
                    })
            })
            .collect()
    }
}
