use crate::error::{AmedasError, Result};
use crate::models::record::WeatherRecord;
use crate::models::station::ColumnLayout;
use crate::models::window::Granularity;
use crate::processors::cleaner::NumericTable;

// Raw page positions of {mean, max, min, precipitation, sunshine} per
// layout and granularity. Fixed source-page configuration; audit against
// the live pages if a shape error starts firing.
const DAILY_OBSERVATORY: [usize; 5] = [6, 7, 8, 3, 16];
const DAILY_AMEDAS: [usize; 5] = [4, 5, 6, 1, 15];
const PENTAD_OBSERVATORY: [usize; 5] = [9, 10, 11, 5, 21];
const PENTAD_AMEDAS: [usize; 5] = [7, 8, 9, 3, 19];

/// Raw column indices for a layout/granularity pair, in canonical order.
pub fn column_indices(layout: ColumnLayout, granularity: Granularity) -> [usize; 5] {
    match (granularity, layout) {
        (Granularity::Daily, ColumnLayout::Observatory) => DAILY_OBSERVATORY,
        (Granularity::Daily, ColumnLayout::Amedas) => DAILY_AMEDAS,
        (Granularity::Pentad, ColumnLayout::Observatory) => PENTAD_OBSERVATORY,
        (Granularity::Pentad, ColumnLayout::Amedas) => PENTAD_AMEDAS,
    }
}

/// Reindex a cleaned page down to the five weather columns.
///
/// A row narrower than the mapping means the source page shape changed;
/// that fails loudly rather than silently shifting quantities into the
/// wrong columns.
pub fn select_columns(
    table: &NumericTable,
    layout: ColumnLayout,
    granularity: Granularity,
    period: &str,
) -> Result<Vec<[Option<f64>; WeatherRecord::FIELD_COUNT]>> {
    let indices = column_indices(layout, granularity);
    let required = indices.iter().max().copied().unwrap_or(0) + 1;

    let mut rows = Vec::with_capacity(table.len());
    for (row_no, row) in table.iter().enumerate() {
        if row.len() < required {
            return Err(AmedasError::source_shape(
                period,
                format!(
                    "row {} has {} columns, layout requires {}",
                    row_no + 1,
                    row.len(),
                    required
                ),
            ));
        }
        rows.push(indices.map(|index| row[index]));
    }
    Ok(rows)
}
