//! Pointer-to-domain mapping and axis-domain derivation for the
//! interactive weather chart.

use crate::types::WeatherSample;

/// Highest time index of the fixed 25-hour sample domain.
pub const TIME_DOMAIN_MAX: i32 = 24;

/// Hover/drag selection over the chart's time axis. One instance per
/// gesture session; holds no other state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected_time: Option<i32>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a plot-local pointer x through the surface-supplied coordinate
    /// inversion. A resolvable position selects the nearest time index
    /// (rounding half away from zero); an unresolvable one leaves the
    /// previous selection in place.
    pub fn pointer_moved<F>(&mut self, local_x: f32, value_at: F)
    where
        F: FnOnce(f32) -> Option<f64>,
    {
        if let Some(value) = value_at(local_x) {
            self.selected_time = Some(value.round() as i32);
        }
    }

    /// Ends the interaction. Clearing is unconditional and idempotent.
    pub fn ended(&mut self) {
        self.selected_time = None;
    }

    pub fn selected_time(&self) -> Option<i32> {
        self.selected_time
    }

    /// The time index to indicate, if any. Selections outside the sample
    /// domain suppress the indicator rather than erroring.
    pub fn indicator_time(&self) -> Option<i32> {
        self.selected_time
            .filter(|time| (0..=TIME_DOMAIN_MAX).contains(time))
    }
}

/// Linear inversion from a plot-local x coordinate to a time-axis value.
/// `None` when the plot has no horizontal extent.
pub fn axis_value_at(local_x: f32, plot_width: f32, domain_max: i32) -> Option<f64> {
    if plot_width <= 0.0 {
        return None;
    }
    Some(f64::from(local_x) / f64::from(plot_width) * f64::from(domain_max))
}

/// Derives the padded y-axis domain for a set of samples: half an interval
/// of headroom below, a quarter above, both aligned outward to multiples of
/// 6 so gridlines land on labels. Pure and idempotent.
pub fn y_axis_domain(samples: &[WeatherSample]) -> (i32, i32) {
    let min_temperature = samples
        .iter()
        .map(|sample| sample.temperature)
        .min()
        .unwrap_or(0);
    let max_temperature = samples
        .iter()
        .map(|sample| sample.temperature)
        .max()
        .unwrap_or(35);
    let interval = max_temperature - min_temperature;

    let mut lower = min_temperature - interval / 2;
    let mut upper = max_temperature + interval / 4;

    lower -= lower % 6;
    upper += 6 - upper % 6;
    (lower, upper)
}
