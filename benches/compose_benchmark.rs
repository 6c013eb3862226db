use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use amedas_series::models::{DateWindow, WeatherRecord};
use amedas_series::processors::{average_years, classify, clean_table};
use amedas_series::sources::RawTable;

// Create test data for benchmarking
fn create_year_stack(n_years: usize, days: usize) -> Vec<Vec<WeatherRecord>> {
    (0..n_years)
        .map(|year| {
            (0..days)
                .map(|day| {
                    let base = 10.0 + (day as f64) * 0.1 + (year as f64) * 0.5;
                    WeatherRecord::from_cells([
                        Some(base),
                        Some(base + 5.0),
                        Some(base - 5.0),
                        if day % 3 == 0 { None } else { Some(1.5) },
                        Some(6.0),
                    ])
                })
                .collect()
        })
        .collect()
}

fn create_raw_page(rows: usize, cols: usize) -> RawTable {
    RawTable::new(
        (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| match (row + col) % 5 {
                        0 => "//".to_string(),
                        1 => "--".to_string(),
                        2 => format!("{}.{})", row, col % 10),
                        _ => format!("{}.{}", row, col % 10),
                    })
                    .collect()
            })
            .collect(),
    )
}

fn benchmark_averager(c: &mut Criterion) {
    let mut group = c.benchmark_group("average_years");
    for n_years in [1, 5, 10] {
        let stack = create_year_stack(n_years, 365);
        group.bench_with_input(
            BenchmarkId::from_parameter(n_years),
            &stack,
            |b, stack| b.iter(|| average_years(black_box(stack)).unwrap()),
        );
    }
    group.finish();
}

fn benchmark_cleaner(c: &mut Criterion) {
    let page = create_raw_page(31, 17);
    c.bench_function("clean_table_month_page", |b| {
        b.iter(|| clean_table(black_box(&page), "bench").unwrap())
    });
}

fn benchmark_classifier(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2025, 4, 24).unwrap();
    let window = DateWindow::new(
        NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(),
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(),
    )
    .unwrap();
    c.bench_function("classify_three_segments", |b| {
        b.iter(|| classify(black_box(&window), black_box(today)))
    });
}

criterion_group!(
    benches,
    benchmark_averager,
    benchmark_cleaner,
    benchmark_classifier
);
criterion_main!(benches);
