use crate::error::{AmedasError, Result};
use crate::sources::table::RawTable;

/// A cleaned page: same shape as the raw table, cells parsed or missing.
pub type NumericTable = Vec<Vec<Option<f64>>>;

/// Normalize one raw cell.
///
/// `//` and `#` are the source's not-measured markers. `--` means no
/// measurable amount and becomes 0.0 — the one place a non-numeric token is
/// coerced to a number. A `)` anywhere and a ` ]` suffix annotate estimated
/// values and are dropped before parsing. Anything still unparseable is
/// missing, never an error.
pub fn clean_cell(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    match cell {
        "//" | "#" => None,
        "--" => Some(0.0),
        _ => {
            let stripped = cell.replace(')', "").replace(" ]", "");
            stripped.trim().parse::<f64>().ok()
        }
    }
}

/// Clean a whole page.
///
/// Total per cell; only a page with no rows at all is reported, against the
/// supplied period.
pub fn clean_table(raw: &RawTable, period: &str) -> Result<NumericTable> {
    if raw.is_empty() {
        return Err(AmedasError::source_shape(period, "page contained no rows"));
    }
    Ok(raw
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| clean_cell(cell)).collect())
        .collect())
}
