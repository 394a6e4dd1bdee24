//! Built-in demo dataset: one full day of hourly weather samples.

use crate::types::{Condition, WeatherSample};

/// Returns the 25-sample demo day (hours 0 through 24 inclusive).
pub fn demo_day() -> Vec<WeatherSample> {
    use Condition::*;

    const DAY: [(i32, Condition); 25] = [
        (21, Thunder),
        (20, Thunder),
        (19, Cloudy),
        (19, Cloudy),
        (18, Cloudy),
        (19, Thunder),
        (19, Cloudy),
        (20, Cloudy),
        (21, Sunny),
        (23, Sunny),
        (25, Sunny),
        (26, Sunny),
        (27, Sunny),
        (28, Sunny),
        (29, Sunny),
        (29, Sunny),
        (30, Sunny),
        (29, Sunny),
        (28, Sunny),
        (27, Sunny),
        (26, Sunny),
        (25, Sunny),
        (24, Cloudy),
        (23, Cloudy),
        (23, Cloudy),
    ];

    DAY.iter()
        .enumerate()
        .map(|(time, &(temperature, condition))| WeatherSample {
            time: time as i32,
            temperature,
            condition,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{y_axis_domain, TIME_DOMAIN_MAX};

    #[test]
    fn covers_every_hour_of_the_domain() {
        let day = demo_day();
        assert_eq!(day.len() as i32, TIME_DOMAIN_MAX + 1);
        for (index, sample) in day.iter().enumerate() {
            assert_eq!(sample.time, index as i32);
        }
    }

    #[test]
    fn demo_day_domain_matches_its_temperatures() {
        // min 18, max 30, interval 12: 12..36 after alignment.
        assert_eq!(y_axis_domain(&demo_day()), (12, 36));
    }
}
