//! Synthetic item generation for stress-testing the packers.

use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PerfSpec {
    pub n: usize,
    pub columns: usize,
}

impl PerfSpec {
    pub fn normalized(self) -> Self {
        Self {
            n: self.n.max(1),
            columns: self.columns.max(1),
        }
    }
}

pub fn perf_source(spec: PerfSpec) -> String {
    let spec = spec.normalized();
    format!("__PERF__ n={} columns={}", spec.n, spec.columns)
}

/// Deterministic block heights in the demo's 20..=200 range, from a simple
/// LCG so stress runs are reproducible for a given seed.
pub fn generate_block_heights(n: usize, seed: u64) -> Vec<f32> {
    let mut state = seed | 1;
    let mut next_f64 = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        let bits = (state >> 12) | 0x3ff0_0000_0000_0000;
        let f = f64::from_bits(bits) - 1.0;
        f.clamp(0.0, 1.0)
    };

    (0..n)
        .map(|_| (20.0 + next_f64() * 180.0) as f32)
        .collect()
}

/// Wall-clock seed for the gallery's Randomize button.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::{FixedSize, Proposal, WaterfallLayout};

    #[test]
    fn heights_are_deterministic_per_seed() {
        let a = generate_block_heights(64, 0x1234_5678_9abc_def0);
        let b = generate_block_heights(64, 0x1234_5678_9abc_def0);
        let c = generate_block_heights(64, 0xdead_beef);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn heights_stay_in_the_demo_range() {
        for height in generate_block_heights(1000, 7) {
            assert!((20.0..=200.0).contains(&height), "height {height}");
        }
    }

    #[test]
    fn generated_heights_pack_into_valid_columns() {
        let heights = generate_block_heights(500, 42);
        let items: Vec<FixedSize> = heights.iter().map(|&h| FixedSize::from_height(h)).collect();
        let layout = WaterfallLayout::new(4, 8.0);
        let geometry = layout.calculate_geometry(&items, Proposal::width_only(800.0));

        let column_x: Vec<f32> = (0..4)
            .map(|k| k as f32 * (geometry.column_width + 8.0))
            .collect();
        let mut accumulated = vec![0.0f32; 4];
        for (index, origin) in geometry.origins.iter().enumerate() {
            let column = column_x
                .iter()
                .position(|&x| (x - origin.x).abs() < 1e-3)
                .expect("origin x must match a column x");
            assert!((accumulated[column] - origin.y).abs() < 1e-2);
            accumulated[column] += heights[index];
        }
        let tallest = accumulated.iter().fold(0.0f32, |a, &b| a.max(b));
        assert!((geometry.height - tallest).abs() < 1e-2);
    }

    #[test]
    fn normalized_clamps_degenerate_specs() {
        let spec = PerfSpec { n: 0, columns: 0 }.normalized();
        assert_eq!(spec, PerfSpec { n: 1, columns: 1 });
        assert_eq!(perf_source(spec), "__PERF__ n=1 columns=1");
    }
}
