//! Footprint command line
//!
//! Reads lifestyle inputs from flags and/or a TOML file, runs the emissions
//! calculator and prints the charts and insights.
//!
//! # Usage
//!
//! ```bash
//! footprint --commute-distance 20 --vehicle car --meat medium --local-food 50 \
//!   --electricity 300 --heating electric --shopping low
//! ```

mod cli;
mod render;

use clap::Parser;
use footprint_core::{CoefficientTable, EmissionsCalculator, RawUserInput};
use std::error::Error;
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::{Args, OutputFormat};
use crate::render::{render_json, TextRenderer};

fn main() -> Result<(), Box<dyn Error>> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let coefficients = match &args.coefficients {
        Some(path) => {
            info!(path = %path.display(), "Loading coefficient table");
            CoefficientTable::from_file(path)?
        }
        None => CoefficientTable::default(),
    };
    let calculator = EmissionsCalculator::from_coefficients(coefficients);

    let raw = match &args.input {
        Some(path) => RawUserInput::from_file(path)?,
        None => RawUserInput::default(),
    }
    .merge(args.flag_input());
    let input = raw.parse()?;
    debug!(?input, "Parsed input");

    if args.delay_ms > 0 {
        eprintln!("Calculating...");
        std::thread::sleep(Duration::from_millis(args.delay_ms));
    }

    let report = calculator.report(&input);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => TextRenderer::default().render(&report, &mut out)?,
        OutputFormat::Json => render_json(&report, &mut out)?,
    }
    out.flush()?;

    Ok(())
}
