use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::record::WeatherRecord;
use crate::models::station::City;

/// One forecast lead day. The forecast pages publish max and min temperature
/// only; the mean is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub max_temp: f64,
    pub min_temp: f64,
}

impl ForecastDay {
    pub fn new(max_temp: f64, min_temp: f64) -> Self {
        Self { max_temp, min_temp }
    }

    /// Mean temperature is taken as the average of max and min.
    pub fn mean_temp(&self) -> f64 {
        (self.max_temp + self.min_temp) / 2.0
    }

    /// A record with the temperature fields filled and no
    /// precipitation/sunshine, which the forecast does not publish.
    pub fn to_record(&self) -> WeatherRecord {
        WeatherRecord {
            mean_temp: Some(self.mean_temp()),
            max_temp: Some(self.max_temp),
            min_temp: Some(self.min_temp),
            precipitation: None,
            sunshine: None,
        }
    }
}

/// Supplier of short-horizon forecasts, bounded by inclusive 1-based lead
/// days (lead 1 is today).
///
/// Implementations return exactly one entry per lead day in range, or a
/// [`crate::AmedasError::Fetch`] naming what is missing.
pub trait ForecastSource {
    fn fetch_forecast(&self, city: &City, first_lead: u32, last_lead: u32)
        -> Result<Vec<ForecastDay>>;
}
