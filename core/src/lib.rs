mod chart;
mod equal_width;
mod load;
mod samples;
mod types;
mod waterfall;

pub use chart::{axis_value_at, y_axis_domain, Selection, TIME_DOMAIN_MAX};
pub use equal_width::{make_cache, EqualWidthRow, RowCache};
pub use load::{load_csv, load_parquet, ColumnMapping, LoadError, LoadOptions};
pub use samples::demo_day;
pub use types::{
    Anchor, Condition, FixedSize, Measurable, Placement, Point, Proposal, Rect, Size,
    WeatherSample,
};
pub use waterfall::{WaterfallGeometry, WaterfallLayout};
