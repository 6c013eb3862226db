use crate::error::{AmedasError, Result};
use crate::models::record::WeatherRecord;

/// Round to one decimal, half away from zero. The published reference
/// tables carry one decimal, so higher precision would never compare clean.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Element-wise mean across year sequences, ignoring missing cells.
///
/// A cell missing in every year stays missing; a cell missing in some years
/// is the mean of the remaining ones. All sequences must share a row count —
/// averaging misaligned rows would blend unrelated days.
pub fn average_years(years: &[Vec<WeatherRecord>]) -> Result<Vec<WeatherRecord>> {
    let first = years.first().ok_or_else(|| {
        AmedasError::ShapeMismatch("no year sequences to average".to_string())
    })?;
    let rows = first.len();
    for (index, year) in years.iter().enumerate() {
        if year.len() != rows {
            return Err(AmedasError::ShapeMismatch(format!(
                "year sequence {} has {} rows, first has {}",
                index + 1,
                year.len(),
                rows
            )));
        }
    }

    let mut averaged = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut cells = [None; WeatherRecord::FIELD_COUNT];
        for (field, cell) in cells.iter_mut().enumerate() {
            let mut sum = 0.0;
            let mut count = 0u32;
            for year in years {
                if let Some(value) = year[row].as_cells()[field] {
                    sum += value;
                    count += 1;
                }
            }
            if count > 0 {
                *cell = Some(round1(sum / f64::from(count)));
            }
        }
        averaged.push(WeatherRecord::from_cells(cells));
    }
    Ok(averaged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(mean: Option<f64>) -> WeatherRecord {
        WeatherRecord {
            mean_temp: mean,
            ..Default::default()
        }
    }

    #[test]
    fn test_averaging_identical_years_is_identity() {
        let year = vec![
            WeatherRecord::from_cells([Some(12.3), Some(18.0), Some(7.5), Some(0.0), Some(6.1)]),
            WeatherRecord::from_cells([Some(13.1), Some(19.2), Some(8.0), None, Some(2.4)]),
        ];

        for n in [1, 2, 5] {
            let stack = vec![year.clone(); n];
            assert_eq!(average_years(&stack).unwrap(), year);
        }
    }

    #[test]
    fn test_missing_everywhere_stays_missing() {
        let stack = vec![vec![record(None)], vec![record(None)], vec![record(None)]];
        assert_eq!(average_years(&stack).unwrap(), vec![record(None)]);
    }

    #[test]
    fn test_partial_missing_averages_the_rest() {
        let stack = vec![
            vec![record(Some(10.0))],
            vec![record(None)],
            vec![record(Some(20.0))],
        ];
        assert_eq!(average_years(&stack).unwrap(), vec![record(Some(15.0))]);
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        let stack = vec![
            vec![record(Some(10.0))],
            vec![record(Some(10.0))],
            vec![record(Some(11.0))],
        ];
        // 31/3 = 10.333...
        assert_eq!(average_years(&stack).unwrap(), vec![record(Some(10.3))]);
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        // 0.25 is exactly representable; it rounds up, not to even
        let stack = vec![vec![record(Some(0.25))]];
        assert_eq!(average_years(&stack).unwrap(), vec![record(Some(0.3))]);

        let stack = vec![vec![record(Some(-0.25))]];
        assert_eq!(average_years(&stack).unwrap(), vec![record(Some(-0.3))]);
    }

    #[test]
    fn test_row_count_mismatch_rejected() {
        let stack = vec![vec![record(Some(1.0)); 3], vec![record(Some(1.0)); 2]];
        assert!(matches!(
            average_years(&stack),
            Err(AmedasError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_empty_stack_rejected() {
        assert!(matches!(
            average_years(&[]),
            Err(AmedasError::ShapeMismatch(_))
        ));
    }
}
