pub mod record;
pub mod series;
pub mod station;
pub mod window;

pub use record::WeatherRecord;
pub use series::WeatherSeries;
pub use station::{City, ColumnLayout, Station};
pub use window::{DateWindow, Granularity};
