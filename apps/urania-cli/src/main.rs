use anyhow::Context;
use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use std::path::PathBuf;
use urania::{BirthData, ChartGenerator, ChartSettings};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a birth chart as JSON")]
pub(crate) struct Args {
    /// Birth date, YYYY-MM-DD.
    #[arg(long, value_parser = parse_date)]
    date: NaiveDate,

    /// Local clock time of birth, HH:MM.
    #[arg(long, value_parser = parse_time, default_value = "12:00")]
    time: NaiveTime,

    /// Latitude in degrees, north positive.
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude in degrees, east positive.
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    /// UTC offset in hours (recorded in the input, not applied).
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    tzone: f64,

    /// Seed for the retrograde flags. Overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Reject out-of-range coordinates and offsets instead of charting them.
    #[arg(long)]
    strict: bool,

    /// Config file (default: configs/urania.toml, then ../../configs/urania.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|e| format!("expected HH:MM: {e}"))
}

impl Args {
    fn birth_data(&self) -> BirthData {
        BirthData::from_naive(self.date.and_time(self.time), self.lat, self.lon, self.tzone)
    }

    /// Command-line flags layered over the config file.
    fn settings(&self, mut settings: ChartSettings) -> ChartSettings {
        if let Some(seed) = self.seed {
            settings.retrograde_seed = Some(seed);
        }
        settings.strict |= self.strict;
        settings
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config = urania_config::load_config(args.config.as_deref())?;
    let settings = args.settings(config.chart);
    log::debug!("Chart settings: {:?}", settings);

    let birth = args.birth_data();
    let chart = ChartGenerator::new(settings)
        .try_generate(&birth)
        .context("Could not generate chart")?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&chart)
    } else {
        serde_json::to_string(&chart)
    }
    .context("Failed to serialize chart")?;
    println!("{json}");

    Ok(())
}
