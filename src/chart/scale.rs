//! Axis math shared by every chart backend.
//!
//! Years sit on an ordinal axis (evenly spaced, ascending left to right) and
//! values on a padded linear axis. Positions are returned as fractions in
//! `0.0..=1.0` so each backend maps them onto its own canvas.

use super::model::LineChart;

const Y_PADDING: f64 = 0.08;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartScale {
    years: Vec<i32>,
    y_min: f64,
    y_max: f64,
}

impl ChartScale {
    pub fn for_chart(chart: &LineChart) -> Self {
        let values = chart
            .series
            .iter()
            .flat_map(|series| series.points.iter().map(|(_, value)| *value));
        let (low, high) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), value| {
            (lo.min(value), hi.max(value))
        });
        let (y_min, y_max) = padded_domain(low, high);
        Self {
            years: chart.years(),
            y_min,
            y_max,
        }
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn y_domain(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    /// Horizontal position of `year`; a lone year is centered.
    pub fn x_fraction(&self, year: i32) -> Option<f64> {
        let index = self.years.binary_search(&year).ok()?;
        if self.years.len() == 1 {
            return Some(0.5);
        }
        Some(index as f64 / (self.years.len() - 1) as f64)
    }

    /// Vertical position of `value`, `0.0` at the bottom.
    pub fn y_fraction(&self, value: f64) -> f64 {
        let span = self.y_max - self.y_min;
        if span <= 0.0 || !span.is_finite() {
            return 0.5;
        }
        ((value - self.y_min) / span).clamp(0.0, 1.0)
    }

    /// Round tick values inside the domain, roughly `target` of them and
    /// never more than four times that.
    pub fn y_ticks(&self, target: usize) -> Vec<f64> {
        let target = target.max(1);
        let step = nice_step((self.y_max - self.y_min) / target as f64);
        let first = (self.y_min / step).ceil() * step;
        let steps = (self.y_max - first) / step + 1e-9;
        if !steps.is_finite() || steps < 0.0 {
            return Vec::new();
        }
        // Steps below the f64 spacing of the values collapse onto the same tick.
        let count = (steps.floor() as usize).min(target * 4);
        let mut ticks: Vec<f64> = Vec::with_capacity(count + 1);
        for i in 0..=count {
            let tick = first + i as f64 * step;
            let tick = if tick.abs() < step * 1e-9 { 0.0 } else { tick };
            if ticks.last() != Some(&tick) {
                ticks.push(tick);
            }
        }
        ticks
    }
}

fn padded_domain(low: f64, high: f64) -> (f64, f64) {
    if !low.is_finite() || !high.is_finite() {
        return (0.0, 1.0);
    }
    if (high - low).abs() < f64::EPSILON {
        let margin = if low.abs() > f64::EPSILON { low.abs() * 0.1 } else { 1.0 };
        return (low - margin, high + margin);
    }
    let pad = (high - low) * Y_PADDING;
    (low - pad, high + pad)
}

/// Smallest of 1, 2, 5 × 10^k that is at least `raw`.
fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Tick label with just enough decimals for the tick spacing.
pub fn format_tick(value: f64, ticks: &[f64]) -> String {
    let step = ticks
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).abs())
        .fold(f64::INFINITY, f64::min);
    let decimals = if step.is_finite() {
        (0..6)
            .find(|digits| {
                let scaled = step * 10f64.powi(*digits as i32);
                (scaled - scaled.round()).abs() < 1e-6
            })
            .unwrap_or(6)
    } else {
        0
    };
    format!("{value:.decimals$}")
}
