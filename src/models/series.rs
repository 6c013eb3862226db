use serde::{Deserialize, Serialize};

use crate::error::{AmedasError, Result};
use crate::models::record::WeatherRecord;

/// An ordered, labelled sequence of weather records.
///
/// Labels are calendar dates (`YYYY/MM/DD` for composed series, `MM/DD` for
/// multi-year daily history) or pentad-of-year ordinals. Producers keep
/// labels chronological and unique; length agreement is enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSeries {
    labels: Vec<String>,
    records: Vec<WeatherRecord>,
}

impl WeatherSeries {
    pub fn new(labels: Vec<String>, records: Vec<WeatherRecord>) -> Result<Self> {
        if labels.len() != records.len() {
            return Err(AmedasError::ShapeMismatch(format!(
                "{} labels for {} records",
                labels.len(),
                records.len()
            )));
        }
        Ok(Self { labels, records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn records(&self) -> &[WeatherRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<WeatherRecord> {
        self.records
    }

    pub fn get(&self, index: usize) -> Option<(&str, &WeatherRecord)> {
        Some((self.labels.get(index)?.as_str(), self.records.get(index)?))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WeatherRecord)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.records.iter())
    }

    /// The mean-temperature column, one cell per position.
    pub fn mean_temps(&self) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.mean_temp).collect()
    }
}
