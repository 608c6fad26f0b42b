use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::table::NumericTable;
use crate::error::{ChartError, ChartResult};

/// Direction of min-max normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// Each row is rescaled on its own (star charts).
    RowWise,
    /// Each column is rescaled on its own, so every variable shares one
    /// comparable [0, 1] scale across charts (radar charts).
    #[default]
    ColumnWise,
}

/// What to do with a row or column whose values are all equal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateRangePolicy {
    /// Keep the quotient of `(x - min) / 0`, i.e. NaN.
    #[default]
    Propagate,
    /// Write this constant for every value of the degenerate vector.
    Constant(f64),
    /// Fail with `ChartError::DegenerateScaling`.
    Reject,
}

/// Rescales `table` to [0, 1] with `x' = (x - min) / (max - min)`.
pub fn scale_table(
    table: &NumericTable,
    mode: ScaleMode,
    policy: DegenerateRangePolicy,
) -> ChartResult<NumericTable> {
    let mut scaled = table.clone();
    let degenerate = match mode {
        ScaleMode::RowWise => {
            let mut degenerate = Vec::new();
            for (index, row) in scaled.rows.iter_mut().enumerate() {
                if !rescale_in_place(row.iter_mut(), policy) {
                    degenerate.push(index);
                }
            }
            degenerate
        }
        ScaleMode::ColumnWise => {
            let mut degenerate = Vec::new();
            for column in 0..scaled.column_count() {
                let cells = scaled.rows.iter_mut().map(|row| &mut row[column]);
                if !rescale_in_place(cells, policy) {
                    degenerate.push(column);
                }
            }
            degenerate
        }
    };

    let axis = match mode {
        ScaleMode::RowWise => "row",
        ScaleMode::ColumnWise => "column",
    };
    if let Some(&index) = degenerate.first() {
        if policy == DegenerateRangePolicy::Reject {
            return Err(ChartError::DegenerateScaling { axis, index });
        }
        for index in &degenerate {
            warn!(axis, index, ?policy, "zero value range while scaling");
        }
    }

    debug!(?mode, rows = scaled.row_count(), columns = scaled.column_count(), "scaled table");
    Ok(scaled)
}

/// Divisor mapping a value to the fraction of the drawing radius.
///
/// Scaled data already peaks at 1.0. Unscaled data is divided by the table
/// maximum so the largest segment still spans the full radius; a maximum
/// that is not positive and finite falls back to 1.0.
#[must_use]
pub fn radius_divisor(table: &NumericTable, scaled: bool) -> f64 {
    if scaled {
        return 1.0;
    }
    let max = table.max_value();
    if max.is_finite() && max > 0.0 { max } else { 1.0 }
}

/// Rescales the referenced cells; returns `false` when their range is zero.
fn rescale_in_place<'a>(
    cells: impl Iterator<Item = &'a mut f64>,
    policy: DegenerateRangePolicy,
) -> bool {
    let mut cells: Vec<&mut f64> = cells.collect();
    let (min, max) = cells.iter().fold((f64::NAN, f64::NAN), |(min, max), value| {
        (min.min(**value), max.max(**value))
    });

    let span = max - min;
    let degenerate = span == 0.0;
    match (degenerate, policy) {
        (true, DegenerateRangePolicy::Constant(constant)) => {
            for cell in &mut cells {
                **cell = constant;
            }
        }
        // Reject leaves the values alone; the caller reports the failure.
        (true, DegenerateRangePolicy::Reject) => {}
        _ => {
            for cell in &mut cells {
                **cell = (**cell - min) / span;
            }
        }
    }
    !degenerate
}

#[cfg(test)]
mod tests {
    use super::{DegenerateRangePolicy, rescale_in_place};

    #[test]
    fn rescale_ignores_nan_when_finding_extremes() {
        let mut values = [2.0, f64::NAN, 4.0];
        assert!(rescale_in_place(values.iter_mut(), DegenerateRangePolicy::Propagate));
        assert_eq!(values[0], 0.0);
        assert!(values[1].is_nan());
        assert_eq!(values[2], 1.0);
    }

    #[test]
    fn propagate_policy_yields_nan_for_flat_vectors() {
        let mut values = [3.0, 3.0];
        assert!(!rescale_in_place(values.iter_mut(), DegenerateRangePolicy::Propagate));
        assert!(values.iter().all(|value| value.is_nan()));
    }
}
