pub mod forecast;
pub mod table;

pub use forecast::{ForecastDay, ForecastSource};
pub use table::{RawTable, TableSource};
