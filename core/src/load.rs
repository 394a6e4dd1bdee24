//! CSV/Parquet loading for hourly weather samples.

use std::path::Path;

use polars::prelude::*;
use thiserror::Error;

use crate::types::{Condition, WeatherSample};

#[derive(Debug, Clone)]
pub struct ColumnMapping {
    pub time: String,
    pub temperature: String,
    pub condition: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            time: "time".into(),
            temperature: "temperature".into(),
            condition: "condition".into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub columns: ColumnMapping,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("column '{0}' not found")]
    MissingColumn(String),
    #[error("column lengths are inconsistent")]
    LengthMismatch,
    #[error("time at row {row} must equal the row position, got {value}")]
    NonContiguousTime { row: usize, value: i32 },
    #[error("unknown weather condition at row {row}: {value}")]
    UnknownCondition { row: usize, value: String },
    #[error("invalid numeric value in column '{column}' at row {row}: {value}")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
    },
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

pub fn load_csv(
    path: impl AsRef<Path>,
    options: LoadOptions,
) -> Result<Vec<WeatherSample>, LoadError> {
    let pl_path = PlPathRef::from_local_path(path.as_ref()).into_owned();
    let lf = LazyCsvReader::new(pl_path).with_has_header(true);
    let df = lf.finish()?.collect()?;
    parse_frame(df, &options.columns)
}

pub fn load_parquet(
    path: impl AsRef<Path>,
    options: LoadOptions,
) -> Result<Vec<WeatherSample>, LoadError> {
    let pl_path = PlPathRef::from_local_path(path.as_ref()).into_owned();
    let lf = LazyFrame::scan_parquet(pl_path, ScanArgsParquet::default())?;
    let df = lf.collect()?;
    parse_frame(df, &options.columns)
}

fn parse_frame(df: DataFrame, columns: &ColumnMapping) -> Result<Vec<WeatherSample>, LoadError> {
    let time = df
        .column(&columns.time)
        .map_err(|_| LoadError::MissingColumn(columns.time.clone()))?;
    let temperature = df
        .column(&columns.temperature)
        .map_err(|_| LoadError::MissingColumn(columns.temperature.clone()))?;
    let condition = df
        .column(&columns.condition)
        .map_err(|_| LoadError::MissingColumn(columns.condition.clone()))?;

    let len = time.len();
    if temperature.len() != len || condition.len() != len {
        return Err(LoadError::LengthMismatch);
    }

    let mut samples = Vec::with_capacity(len);
    for row in 0..len {
        let time = to_i32(time.get(row)?, &columns.time, row)?;
        if time != row as i32 {
            // Selection indexing relies on samples[time] being the sample
            // for hour `time`.
            return Err(LoadError::NonContiguousTime { row, value: time });
        }
        let temperature = to_i32(temperature.get(row)?, &columns.temperature, row)?;
        let condition = to_condition(condition.get(row)?, row)?;

        samples.push(WeatherSample {
            time,
            temperature,
            condition,
        });
    }

    Ok(samples)
}

fn to_i32(value: AnyValue, column: &str, row: usize) -> Result<i32, LoadError> {
    let invalid = |value: String| LoadError::InvalidNumber {
        column: column.to_string(),
        row,
        value,
    };
    match value {
        AnyValue::Int64(v) => i32::try_from(v).map_err(|_| invalid(v.to_string())),
        AnyValue::Int32(v) => Ok(v),
        AnyValue::UInt64(v) => i32::try_from(v).map_err(|_| invalid(v.to_string())),
        AnyValue::UInt32(v) => i32::try_from(v).map_err(|_| invalid(v.to_string())),
        AnyValue::String(s) => s.parse::<i32>().map_err(|_| invalid(s.to_string())),
        AnyValue::StringOwned(s) => to_i32(AnyValue::String(&s), column, row),
        other => Err(invalid(format!("{other:?}"))),
    }
}

fn to_condition(value: AnyValue, row: usize) -> Result<Condition, LoadError> {
    match value {
        AnyValue::String(s) => Condition::parse(s).ok_or_else(|| LoadError::UnknownCondition {
            row,
            value: s.to_string(),
        }),
        AnyValue::StringOwned(s) => to_condition(AnyValue::String(&s), row),
        other => Err(LoadError::UnknownCondition {
            row,
            value: format!("{other:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{DataFrame, ParquetWriter, Series};
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(ext: &str) -> std::path::PathBuf {
        let nonce = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("gpui-gallery-{nonce}.{ext}"))
    }

    fn sample_csv() -> String {
        [
            "time,temperature,condition",
            "0,21,thunder",
            "1,20,Thunder",
            "2,19,cloudy",
            "3,19,sunny",
        ]
        .join("\n")
    }

    #[test]
    fn load_csv_with_defaults() {
        let path = temp_path("csv");
        fs::write(&path, sample_csv()).unwrap();

        let samples = load_csv(&path, LoadOptions::default()).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0].temperature, 21);
        assert_eq!(samples[1].condition, Condition::Thunder);
        assert_eq!(samples[3].time, 3);
    }

    #[test]
    fn errors_on_missing_column() {
        let path = temp_path("csv");
        fs::write(&path, "time,temperature\n0,21\n").unwrap();

        let err = load_csv(&path, LoadOptions::default()).unwrap_err();
        fs::remove_file(&path).ok();

        match err {
            LoadError::MissingColumn(name) => assert_eq!(name, "condition"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn errors_on_unknown_condition() {
        let path = temp_path("csv");
        fs::write(&path, "time,temperature,condition\n0,21,foggy\n").unwrap();

        let err = load_csv(&path, LoadOptions::default()).unwrap_err();
        fs::remove_file(&path).ok();

        match err {
            LoadError::UnknownCondition { row, value } => {
                assert_eq!(row, 0);
                assert_eq!(value, "foggy");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn errors_on_non_contiguous_time() {
        let path = temp_path("csv");
        fs::write(
            &path,
            "time,temperature,condition\n0,21,sunny\n5,20,sunny\n",
        )
        .unwrap();

        let err = load_csv(&path, LoadOptions::default()).unwrap_err();
        fs::remove_file(&path).ok();

        match err {
            LoadError::NonContiguousTime { row, value } => {
                assert_eq!(row, 1);
                assert_eq!(value, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn load_parquet_with_defaults() {
        let path = temp_path("parquet");

        let mut df = DataFrame::new(vec![
            Series::new("time".into(), &[0i64, 1, 2]).into(),
            Series::new("temperature".into(), &[18i64, 19, 20]).into(),
            Series::new("condition".into(), &["sunny", "cloudy", "rainy"]).into(),
        ])
        .unwrap();

        let mut file = fs::File::create(&path).unwrap();
        ParquetWriter::new(&mut file).finish(&mut df).unwrap();

        let samples = load_parquet(&path, LoadOptions::default()).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(samples.len(), 3);
        assert_eq!(samples[2].condition, Condition::Rainy);
        assert_eq!(samples[1].temperature, 19);
    }
}
