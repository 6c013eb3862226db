use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::series::WeatherSeries;
use crate::utils::constants::COLUMN_NAMES;

/// Writes a series as CSV: a header, then one row per record with the label
/// first and missing cells left empty.
pub struct CsvSeriesWriter;

impl CsvSeriesWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_file(&self, series: &WeatherSeries, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_to(series, file)
    }

    pub fn write_to<W: Write>(&self, series: &WeatherSeries, sink: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(sink);

        let mut header = vec!["label"];
        header.extend(COLUMN_NAMES);
        writer.write_record(&header)?;

        for (label, record) in series.iter() {
            let mut row = vec![label.to_string()];
            row.extend(
                record
                    .as_cells()
                    .iter()
                    .map(|cell| cell.map(|v| v.to_string()).unwrap_or_default()),
            );
            writer.write_record(&row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl Default for CsvSeriesWriter {
    fn default() -> Self {
        Self::new()
    }
}
