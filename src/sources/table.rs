use crate::error::Result;
use crate::models::window::Granularity;

/// An already-parsed source page: ordered rows of ordered text cells.
///
/// Transport and markup parsing live behind [`TableSource`]; the rest of the
/// crate only ever sees this shape. Rows may be ragged — the column selector
/// checks widths where it matters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Supplier of raw observation tables, one page per station and period.
///
/// Daily pages cover one month; pentad pages cover a whole year and ignore
/// the month argument. Implementations own transport and retry policy and
/// report failures as [`crate::AmedasError::Fetch`] with the period named.
pub trait TableSource {
    fn fetch_table(
        &self,
        site_code: &str,
        year: i32,
        month: u32,
        granularity: Granularity,
    ) -> Result<RawTable>;
}
