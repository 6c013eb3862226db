use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "amedas-series")]
#[command(about = "Composite temperature series from AMeDAS pages, forecasts and climatological normals")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compose a continuous daily series across past, forecast and normal sources
    Compose {
        #[arg(short, long, help = "Station name, e.g. 石巻")]
        station: String,

        #[arg(short, long, help = "Municipality name for forecast days, e.g. 石巻市")]
        city: String,

        #[arg(short, long, help = "First day of the series (YYYY-MM-DD)")]
        begin: NaiveDate,

        #[arg(short, long, default_value = "30", help = "Number of days to compose")]
        length: u32,

        #[arg(
            short = 'y',
            long,
            default_value = "1",
            help = "Years averaged into normal-filled days"
        )]
        n_years: usize,

        #[arg(short, long, help = "Directory of scraped page tables")]
        data_dir: PathBuf,

        #[arg(short, long, help = "Scraped forecast file (lead,max,min rows)")]
        forecast_file: PathBuf,

        #[arg(long, help = "Reference date override [default: today]")]
        today: Option<NaiveDate>,

        #[arg(long, value_parser = ["table", "csv", "json"], default_value = "table")]
        format: String,

        #[arg(short, long, help = "Write CSV output to this path instead of stdout")]
        output: Option<PathBuf>,

        #[arg(long, default_value = "false", help = "Report implausible records")]
        validate: bool,
    },

    /// Fetch a multi-year averaged history window directly
    History {
        #[arg(short, long, help = "Station name, e.g. 古川")]
        station: String,

        #[arg(short, long, help = "First day of the window (YYYY-MM-DD)")]
        begin: NaiveDate,

        #[arg(short, long, help = "Last day of the window (YYYY-MM-DD)")]
        end: NaiveDate,

        #[arg(short = 'y', long, default_value = "1", help = "Years to average")]
        n_years: usize,

        #[arg(long, default_value = "false", help = "Pentad buckets instead of days")]
        pentad: bool,

        #[arg(short, long, help = "Directory of scraped page tables")]
        data_dir: PathBuf,

        #[arg(long, help = "Reference date override [default: today]")]
        today: Option<NaiveDate>,

        #[arg(short, long, help = "Write CSV output to this path instead of stdout")]
        output: Option<PathBuf>,
    },

    /// List the fixed station and municipality tables
    List,
}
