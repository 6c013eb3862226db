pub mod csv_forecast;
pub mod csv_table;

pub use csv_forecast::CsvForecastSource;
pub use csv_table::CsvTableSource;
