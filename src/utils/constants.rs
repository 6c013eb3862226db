/// Forecast horizon: lead days 1 through 14, where lead 1 is today
pub const FORECAST_HORIZON_DAYS: i64 = 14;

/// Pentad geometry
pub const PENTAD_DAYS: i64 = 5;
pub const PENTADS_PER_MONTH: usize = 6;
pub const PENTADS_PER_YEAR: usize = 72;

/// Normals keep February at 28 days in every year, leap or not
pub const FEBRUARY_NORMAL_DAYS: usize = 28;

/// Window clamping: spans of 367 days or more are cut to 365
pub const MAX_WINDOW_SPAN_DAYS: i64 = 367;
pub const CLAMPED_SPAN_DAYS: i64 = 364;

/// Weather quantities in canonical column order
pub const COLUMN_NAMES: [&str; 5] = [
    "mean_temp",
    "max_temp",
    "min_temp",
    "precipitation",
    "sunshine",
];

/// Forecast district page codes, consumed by transport implementations
pub const FORECAST_DISTRICT_EAST: u32 = 3410;
pub const FORECAST_DISTRICT_WEST: u32 = 3420;
