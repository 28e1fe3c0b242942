mod models;
mod types;
mod validator;

use std::fs;
use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::models::ValidationResponse;
use crate::validator::SalesValidator;

fn main() -> Result<()> {
    //NOTE: The CLI surface is a stand-in for whatever hosting layer delivers the
    //      request body; a single positional argument keeps it simpler than clap.
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: sales-data-validator [input].csv [log_level:optional] > [report].txt");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let body = fs::read(path)?;
    let validator = SalesValidator::new();
    let response = validator.validate(&body);

    info!("Validation finished with status {}", response.status_code);

    write_response_to_stdout(&response)?;

    if response.status_code != 200 {
        exit(1);
    }

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The validation report owns stdout, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_response_to_stdout(response: &ValidationResponse) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "{}", response.body)?;

    output.flush()?;

    Ok(())
}
