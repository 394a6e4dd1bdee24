use std::path::Path;

use clap::ValueEnum;
use gallery_ui::DemoKind;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum InputFormat {
    Csv,
    Parquet,
}

pub fn detect_format(path: &Path) -> Option<InputFormat> {
    let ext = path.extension()?.to_string_lossy().to_ascii_lowercase();
    match ext.as_str() {
        "csv" => Some(InputFormat::Csv),
        "parquet" | "parq" => Some(InputFormat::Parquet),
        _ => None,
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum DemoArg {
    Waterfall,
    EqualWidth,
    Chart,
}

impl From<DemoArg> for DemoKind {
    fn from(arg: DemoArg) -> Self {
        match arg {
            DemoArg::Waterfall => DemoKind::Waterfall,
            DemoArg::EqualWidth => DemoKind::EqualWidth,
            DemoArg::Chart => DemoKind::Chart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn format_is_inferred_from_the_extension() {
        assert!(matches!(
            detect_format(&PathBuf::from("day.csv")),
            Some(InputFormat::Csv)
        ));
        assert!(matches!(
            detect_format(&PathBuf::from("day.PARQ")),
            Some(InputFormat::Parquet)
        ));
        assert!(detect_format(&PathBuf::from("day.json")).is_none());
        assert!(detect_format(&PathBuf::from("day")).is_none());
    }
}
