use std::path::Path;

use validator::Validate;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::models::series::WeatherSeries;
use crate::models::station::{City, Station};
use crate::models::window::{DateWindow, Granularity};
use crate::processors::composer::SeriesComposer;
use crate::processors::history::HistoryFetcher;
use crate::readers::{CsvForecastSource, CsvTableSource};
use crate::utils::progress::ProgressReporter;
use crate::writers::csv_writer::CsvSeriesWriter;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Compose {
            station,
            city,
            begin,
            length,
            n_years,
            data_dir,
            forecast_file,
            today,
            format,
            output,
            validate,
        } => {
            println!("Composing series for {} / {}...", station, city);
            let tables = CsvTableSource::new(data_dir);
            let forecast = CsvForecastSource::new(forecast_file);
            let mut composer = SeriesComposer::new(&tables, &forecast);
            if let Some(today) = today {
                composer = composer.with_today(today);
            }

            let progress = ProgressReporter::new_spinner("Fetching pages...", false);
            let series = composer.compose(&station, &city, begin, length, n_years)?;
            progress.finish_with_message(&format!("Composed {} records", series.len()));

            if validate {
                report_implausible(&series);
            }
            emit(&series, &format, output.as_deref())?;
        }

        Commands::History {
            station,
            begin,
            end,
            n_years,
            pentad,
            data_dir,
            today,
            output,
        } => {
            println!("Fetching history for {}...", station);
            let tables = CsvTableSource::new(data_dir);
            let station = Station::lookup(&station)?;
            let mut fetcher = HistoryFetcher::new(&tables);
            if let Some(today) = today {
                fetcher = fetcher.with_today(today);
            }
            let granularity = if pentad {
                Granularity::Pentad
            } else {
                Granularity::Daily
            };
            let window = DateWindow::new(begin, end)?;

            let progress = ProgressReporter::new_spinner("Fetching pages...", false);
            let series = fetcher.fetch(station, window, n_years, granularity)?;
            progress.finish_with_message(&format!("Fetched {} records", series.len()));

            match output {
                Some(path) => {
                    CsvSeriesWriter::new().write_file(&series, &path)?;
                    println!("Wrote {}", path.display());
                }
                None => print_table(&series),
            }
        }

        Commands::List => {
            println!("Stations:");
            for station in Station::all() {
                println!(
                    "  {:<6} {:>6}  {:?}",
                    station.name, station.site_code, station.layout
                );
            }
            println!();
            println!("Municipalities:");
            for city in City::all() {
                let district = if city.western { "west" } else { "east" };
                println!("  {:<6} {:>5}  {}", city.name, city.code, district);
            }
        }
    }
    Ok(())
}

fn emit(series: &WeatherSeries, format: &str, output: Option<&Path>) -> Result<()> {
    if let Some(path) = output {
        CsvSeriesWriter::new().write_file(series, path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }
    match format {
        "csv" => {
            let mut buffer = Vec::new();
            CsvSeriesWriter::new().write_to(series, &mut buffer)?;
            print!("{}", String::from_utf8_lossy(&buffer));
        }
        "json" => println!("{}", serde_json::to_string_pretty(series)?),
        _ => print_table(series),
    }
    Ok(())
}

fn print_table(series: &WeatherSeries) {
    println!(
        "{:<12} {:>6} {:>6} {:>6} {:>7} {:>8}",
        "label", "mean", "max", "min", "precip", "sun"
    );
    for (label, record) in series.iter() {
        println!(
            "{:<12} {:>6} {:>6} {:>6} {:>7} {:>8}",
            label,
            cell(record.mean_temp),
            cell(record.max_temp),
            cell(record.min_temp),
            cell(record.precipitation),
            cell(record.sunshine)
        );
    }
}

fn cell(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| "-".to_string())
}

fn report_implausible(series: &WeatherSeries) {
    let mut flagged = 0;
    for (label, record) in series.iter() {
        if record.validate().is_err() || record.validate_relationships().is_err() {
            println!("Implausible record at {}: {:?}", label, record);
            flagged += 1;
        }
    }
    if flagged == 0 {
        println!("All records within plausible ranges");
    } else {
        println!("{} implausible records", flagged);
    }
}
