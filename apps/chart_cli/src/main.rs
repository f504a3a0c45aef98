use anyhow::Context;
use astro_engine::zodiac::format_longitude;
use astro_engine::{status, ChartAssembler, ChartError, ChartInput, ChartResponse, SwissEphemerisAdapter};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// Exit status for requests rejected because of their content
const EXIT_BAD_INPUT: u8 = 2;

#[derive(Parser, Debug)]
#[command(author, version, about = "Natal chart snapshots from the command line")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a chart for a local date, time, timezone and location
    Chart(ChartArgs),
    /// Report liveness without loading the ephemeris
    Health,
}

#[derive(clap::Args, Debug)]
struct ChartArgs {
    /// Local date, YYYY-MM-DD
    #[arg(long)]
    date: String,

    /// Local time, 24-hour HH:MM
    #[arg(long)]
    time: String,

    /// IANA timezone name, e.g. America/Toronto
    #[arg(long)]
    timezone: String,

    /// Latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Engine config file (defaults to configs/engine.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.command {
        Command::Health => match serde_json::to_string(&status::health()) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
        Command::Chart(chart) => {
            if let Err(e) = validate_location(chart.lat, chart.lon) {
                eprintln!("error: {e}");
                return ExitCode::from(EXIT_BAD_INPUT);
            }
            match run_chart(chart) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) if e.downcast_ref::<ChartError>().is_some() => {
                    eprintln!("error: {e}");
                    ExitCode::from(EXIT_BAD_INPUT)
                }
                Err(e) => {
                    eprintln!("error: {e:#}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn validate_location(lat: f64, lon: f64) -> anyhow::Result<()> {
    if !(-90.0..=90.0).contains(&lat) {
        anyhow::bail!("latitude {lat} is outside [-90, 90]");
    }
    if !(-180.0..=180.0).contains(&lon) {
        anyhow::bail!("longitude {lon} is outside [-180, 180]");
    }
    Ok(())
}

fn run_chart(args: ChartArgs) -> anyhow::Result<()> {
    let settings = astro_config::load_engine_settings(args.config.as_deref())
        .context("loading engine config")?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .init();

    let adapter = SwissEphemerisAdapter::new(settings.ephemeris_path.clone())
        .context("initializing Swiss Ephemeris")?;
    let assembler = ChartAssembler::new(Arc::new(adapter));

    let input = ChartInput::new(args.date, args.time, args.timezone, args.lat, args.lon);
    info!(
        "charting {} {} {} at ({}, {})",
        input.date(),
        input.time(),
        input.timezone(),
        input.lat(),
        input.lon()
    );
    let response = assembler.respond(input)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Text => print!("{}", render_text(&response)),
    }
    Ok(())
}

fn render_text(response: &ChartResponse) -> String {
    let input = &response.input;
    let chart = &response.chart;
    let mut out = String::new();

    let _ = writeln!(out, "{}", response.engine);
    let _ = writeln!(
        out,
        "{} {} {} ({}, {})",
        input.date(),
        input.time(),
        input.timezone(),
        input.lat(),
        input.lon()
    );
    let _ = writeln!(out, "{:<8} {}", "ASC", format_longitude(chart.angles.ascendant));
    let _ = writeln!(out, "{:<8} {}", "MC", format_longitude(chart.angles.midheaven));
    for (body, position) in &chart.planets {
        let marker = if position.retrograde { " R" } else { "" };
        let _ = writeln!(
            out,
            "{:<8} {}{}",
            body.name().to_uppercase(),
            format_longitude(position.lon),
            marker
        );
    }
    out
}
