use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AmedasError, Result};

/// One reporting unit: a day, or a 5-day pentad bucket.
///
/// Every field is optional; `None` is the uniform missing marker produced by
/// table cleaning and preserved through averaging. The `validator` ranges are
/// plausibility bounds (pentad buckets hold 5-day sums, so precipitation and
/// sunshine bounds cover both granularities); they are checked only by the
/// explicit validation pass, never during cleaning or averaging.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct WeatherRecord {
    #[validate(range(min = -50.0, max = 50.0))]
    pub mean_temp: Option<f64>,

    #[validate(range(min = -50.0, max = 50.0))]
    pub max_temp: Option<f64>,

    #[validate(range(min = -50.0, max = 50.0))]
    pub min_temp: Option<f64>,

    #[validate(range(min = 0.0, max = 1500.0))]
    pub precipitation: Option<f64>,

    #[validate(range(min = 0.0, max = 80.0))]
    pub sunshine: Option<f64>,
}

impl WeatherRecord {
    /// Number of weather quantities per record, in canonical column order.
    pub const FIELD_COUNT: usize = 5;

    /// Build a record from cells in canonical order
    /// {mean, max, min, precipitation, sunshine}.
    pub fn from_cells(cells: [Option<f64>; Self::FIELD_COUNT]) -> Self {
        let [mean_temp, max_temp, min_temp, precipitation, sunshine] = cells;
        Self {
            mean_temp,
            max_temp,
            min_temp,
            precipitation,
            sunshine,
        }
    }

    /// The record's cells in canonical column order.
    pub fn as_cells(&self) -> [Option<f64>; Self::FIELD_COUNT] {
        [
            self.mean_temp,
            self.max_temp,
            self.min_temp,
            self.precipitation,
            self.sunshine,
        ]
    }

    pub fn is_missing(&self) -> bool {
        self.as_cells().iter().all(Option::is_none)
    }

    pub fn has_complete_temperature(&self) -> bool {
        self.mean_temp.is_some() && self.max_temp.is_some() && self.min_temp.is_some()
    }

    pub fn temperature_range(&self) -> Option<f64> {
        match (self.min_temp, self.max_temp) {
            (Some(min), Some(max)) => Some(max - min),
            _ => None,
        }
    }

    /// Check min <= mean <= max where all three are present.
    ///
    /// The tolerance absorbs rounding drift between independently averaged
    /// columns.
    pub fn validate_relationships(&self) -> Result<()> {
        if let (Some(min), Some(mean), Some(max)) = (self.min_temp, self.mean_temp, self.max_temp)
        {
            let tolerance = 1.0;

            if min > mean + tolerance {
                return Err(AmedasError::TemperatureValidation {
                    message: format!(
                        "Min temperature {} > mean temperature {} (tolerance={})",
                        min, mean, tolerance
                    ),
                });
            }

            if mean > max + tolerance {
                return Err(AmedasError::TemperatureValidation {
                    message: format!(
                        "Mean temperature {} > max temperature {} (tolerance={})",
                        mean, max, tolerance
                    ),
                });
            }
        }

        Ok(())
    }
}
