use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gallery_core::{demo_day, load_csv, load_parquet, LoadOptions};
use gallery_ui::{launch_gallery, GalleryOptions};

mod input;
use input::{detect_format, DemoArg, InputFormat};

#[derive(Parser, Debug)]
#[command(name = "gpui-gallery")]
struct Args {
    /// Path to a CSV or Parquet file with hourly weather samples for the
    /// chart demo. Uses the built-in demo day if omitted.
    path: Option<PathBuf>,

    /// Explicitly set the file format. If omitted, inferred from extension.
    #[arg(long, value_enum)]
    format: Option<InputFormat>,

    /// Demo to show at launch.
    #[arg(long, value_enum, default_value = "waterfall")]
    demo: DemoArg,

    /// Column count for the waterfall demo.
    #[arg(long, default_value_t = 3, value_parser = parse_columns)]
    columns: usize,

    /// Horizontal gap between waterfall columns, in pixels.
    #[arg(long, default_value_t = 10.0)]
    spacing: f32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let samples: Result<Vec<_>, String> = match &args.path {
        None => Ok(demo_day()),
        Some(path) => (|| {
            let format = args
                .format
                .or_else(|| detect_format(path))
                .ok_or_else(|| "could not determine file format (use --format)".to_string())?;

            let samples = match format {
                InputFormat::Csv => load_csv(path, LoadOptions::default()),
                InputFormat::Parquet => load_parquet(path, LoadOptions::default()),
            }
            .map_err(|e| format!("failed to load {}: {e}", path.display()))?;

            if samples.is_empty() {
                return Err(format!("no samples loaded from {}", path.display()));
            }

            Ok(samples)
        })(),
    };

    let options = GalleryOptions {
        initial_demo: args.demo.into(),
        columns: args.columns,
        spacing: args.spacing,
        source: args
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in demo day".to_string()),
    };

    launch_gallery(samples, options);
    Ok(())
}

fn parse_columns(raw: &str) -> Result<usize, String> {
    let columns: usize = raw
        .parse()
        .map_err(|_| format!("invalid column count: {raw}"))?;
    if columns == 0 {
        return Err("column count must be at least 1".into());
    }
    Ok(columns)
}
