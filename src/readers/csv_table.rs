use std::path::{Path, PathBuf};

use crate::error::{AmedasError, Result};
use crate::models::window::Granularity;
use crate::sources::table::{RawTable, TableSource};

/// File-backed [`TableSource`]: reads previously scraped pages stored as
/// headerless CSV in a directory.
///
/// Daily pages are named `{site}_{year}_{month:02}_daily.csv`; pentad pages
/// cover a whole year as `{site}_{year}_pentad.csv`. Cells are kept as text
/// so the cleaner sees exactly what the page carried, placeholder tokens
/// included.
pub struct CsvTableSource {
    dir: PathBuf,
}

impl CsvTableSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn page_path(
        &self,
        site_code: &str,
        year: i32,
        month: u32,
        granularity: Granularity,
    ) -> PathBuf {
        let name = match granularity {
            Granularity::Daily => format!("{}_{}_{:02}_daily.csv", site_code, year, month),
            Granularity::Pentad => format!("{}_{}_pentad.csv", site_code, year),
        };
        self.dir.join(name)
    }

    fn read_table(path: &Path, period: &str) -> Result<RawTable> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|e| AmedasError::fetch(period, e.to_string()))?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| AmedasError::fetch(period, e.to_string()))?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(RawTable::new(rows))
    }
}

impl TableSource for CsvTableSource {
    fn fetch_table(
        &self,
        site_code: &str,
        year: i32,
        month: u32,
        granularity: Granularity,
    ) -> Result<RawTable> {
        let path = self.page_path(site_code, year, month, granularity);
        let period = path.display().to_string();
        if !path.exists() {
            return Err(AmedasError::fetch(period, "page file not found"));
        }
        Self::read_table(&path, &period)
    }
}
