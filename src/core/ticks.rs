//! Round reference values for the concentric circles of a chart.

const NICE_MULTIPLIERS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];
const TICK_TOLERANCE: f64 = 1e-10;
const MAX_LABEL_DIGITS: usize = 10;

/// Evenly spaced "nice" values in `(0, max_value]`, about `target_count` of them.
///
/// The step is one of `{1, 2, 2.5, 5, 10} x 10^k`. Returns `[0.0]` when
/// `max_value` is not positive (or not finite) and nothing for a target of zero.
#[must_use]
pub fn pretty_ticks(max_value: f64, target_count: usize) -> Vec<f64> {
    if !(max_value.is_finite() && max_value > 0.0) {
        return vec![0.0];
    }
    if target_count == 0 {
        return Vec::new();
    }

    let step = nice_step(max_value, target_count);
    if !(step.is_finite() && step > 0.0) {
        return vec![max_value];
    }
    let decimals = step_decimals(step);
    let factor = 10f64.powi(decimals);

    let mut ticks = Vec::with_capacity(target_count + 1);
    let mut multiple = 1.0;
    loop {
        let value = step * multiple;
        if value > max_value + TICK_TOLERANCE {
            break;
        }
        ticks.push((value * factor).round() / factor);
        multiple += 1.0;
    }
    ticks
}

fn nice_step(max_value: f64, target_count: usize) -> f64 {
    let target = target_count as f64;
    let raw_step = max_value / target;
    let base = 10f64.powf(raw_step.log10().floor());

    let position = NICE_MULTIPLIERS
        .iter()
        .position(|multiplier| multiplier * base >= raw_step)
        .unwrap_or(NICE_MULTIPLIERS.len() - 1);
    let mut step = NICE_MULTIPLIERS[position] * base;

    // Too coarse: fall back to the next smaller multiplier. At least one
    // tick must fit below `max_value`.
    if max_value / step < (target - 1.0).max(1.0) {
        step = if position == 0 {
            NICE_MULTIPLIERS[3] * base / 10.0
        } else {
            NICE_MULTIPLIERS[position - 1] * base
        };
    }
    step
}

/// Decimal places that keep every multiple of `step` on its grid.
///
/// This is the place of the leading digit of `step`, plus one when the
/// mantissa is 2.5.
fn step_decimals(step: f64) -> i32 {
    let magnitude = step.log10().floor();
    let mantissa = step / 10f64.powf(magnitude);
    let extra = if (mantissa - 2.5).abs() < 1e-6 { 1.0 } else { 0.0 };
    (-magnitude + extra).max(0.0) as i32
}

/// Number of decimals needed to tell every tick apart and print it exactly.
#[must_use]
pub fn tick_label_digits(ticks: &[f64]) -> usize {
    ticks
        .iter()
        .filter(|tick| tick.is_finite() && **tick != 0.0)
        .map(|tick| {
            let leading = (-tick.abs().log10().floor()).max(0.0) as usize;
            let exact = (0..=MAX_LABEL_DIGITS)
                .find(|digits| {
                    let scaled = tick * 10f64.powi(*digits as i32);
                    (scaled - scaled.round()).abs() < 1e-6
                })
                .unwrap_or(MAX_LABEL_DIGITS);
            leading.max(exact)
        })
        .max()
        .unwrap_or(0)
}

#[must_use]
pub fn format_tick(value: f64, digits: usize) -> String {
    format!("{value:.digits$}")
}

#[cfg(test)]
mod tests {
    use super::{nice_step, step_decimals};

    #[test]
    fn coarse_step_is_refined() {
        // 47 / 4 = 11.75 picks 20, which only fits twice; fall back to 10.
        assert_eq!(nice_step(47.0, 4), 10.0);
    }

    #[test]
    fn single_target_still_fits_one_tick() {
        // 3 / 1 picks 5, which overshoots the maximum.
        assert_eq!(nice_step(3.0, 1), 2.5);
    }

    #[test]
    fn quarter_steps_keep_two_decimals() {
        assert_eq!(step_decimals(0.25), 2);
        assert_eq!(step_decimals(0.2), 1);
        assert_eq!(step_decimals(25.0), 0);
    }
}
