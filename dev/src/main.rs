//! Headless stress harness for the packers. Times a waterfall geometry
//! pass and an equal-width cache pass over synthetic block heights, then
//! optionally opens the gallery on the same dataset via `--open`.

use std::time::Instant;

use gallery_core::{
    demo_day, EqualWidthRow, FixedSize, Proposal, Size, WaterfallLayout,
};
use gallery_ui::logging::log_layout;
use gallery_ui::perf::{generate_block_heights, perf_source, PerfSpec};
use gallery_ui::{launch_gallery, DemoKind, GalleryOptions};

fn parse_arg_u64(name: &str, default: u64) -> u64 {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == name {
            if let Some(value) = args.next() {
                if let Ok(v) = value.parse::<u64>() {
                    return v;
                }
            }
        }
    }
    default
}

fn parse_arg_string(name: &str) -> Option<String> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == name {
            return args.next();
        }
    }
    None
}

fn has_flag(name: &str) -> bool {
    std::env::args().skip(1).any(|arg| arg == name)
}

fn preset_n(preset: &str) -> Option<usize> {
    match preset.to_ascii_lowercase().as_str() {
        "50k" | "small" => Some(50_000),
        "200k" | "medium" => Some(200_000),
        "1m" | "1000000" | "large" => Some(1_000_000),
        _ => None,
    }
}

fn main() {
    let preset = parse_arg_string("--preset");
    let n = preset
        .as_deref()
        .and_then(preset_n)
        .unwrap_or_else(|| parse_arg_u64("--n", 200_000) as usize);
    let columns = parse_arg_u64("--columns", 3).max(1) as usize;
    let seed = parse_arg_u64("--seed", 0x1234_5678_9abc_def0);

    let spec = PerfSpec { n, columns }.normalized();
    let heights = generate_block_heights(spec.n, seed);
    let items: Vec<FixedSize> = heights
        .iter()
        .map(|&h| FixedSize(Size::new(h / 2.0, h)))
        .collect();

    let layout = WaterfallLayout {
        columns: spec.columns,
        spacing: 10.0,
    };
    let proposal = Proposal::width_only(1200.0);

    let started = Instant::now();
    let geometry = layout.calculate_geometry(&items, proposal);
    let waterfall_elapsed = started.elapsed();
    let waterfall_size = layout.size_that_fits(&geometry, proposal);

    let row = EqualWidthRow { spacing: 10.0 };

    let started = Instant::now();
    let cache = row.make_cache(&items);
    let row_size = row.size_that_fits(items.len(), &cache);
    let equal_width_elapsed = started.elapsed();

    let report = format!(
        "perf n={} columns={} waterfall={:?} size={}x{} equal_width={:?} row={}x{}",
        spec.n,
        spec.columns,
        waterfall_elapsed,
        waterfall_size.width,
        waterfall_size.height,
        equal_width_elapsed,
        row_size.width,
        row_size.height,
    );
    println!("{report}");
    log_layout(&report);

    if has_flag("--open") {
        let options = GalleryOptions {
            initial_demo: DemoKind::Waterfall,
            columns: spec.columns,
            spacing: 10.0,
            source: perf_source(spec),
        };
        launch_gallery(Ok(demo_day()), options);
    }
}
