pub mod averager;
pub mod cleaner;
pub mod columns;
pub mod composer;
pub mod history;
pub mod resampler;

pub use averager::average_years;
pub use cleaner::{clean_cell, clean_table, NumericTable};
pub use columns::{column_indices, select_columns};
pub use composer::{classify, Segment, SegmentKind, SegmentPlan, SeriesComposer};
pub use history::HistoryFetcher;
pub use resampler::{pentad_of_day, PeriodResampler};
