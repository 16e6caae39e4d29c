//! voltdiv - resistive voltage divider calculator
//!
//! # Usage
//!
//! ```bash
//! voltdiv 12 -1 10000 4700    # solve the output voltage
//! voltdiv 12 5 10000 -1       # solve R2
//! voltdiv 12 6 -1 -1 0.5      # list E24 pairs drawing at least 0.5 A through R1
//! ```

use std::process::ExitCode;
use std::str::FromStr;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use voltdiv::{DividerInputs, RSeries, E12, E24, E3, E6};

/// Value used on the command line to mark a quantity as unknown.
const UNKNOWN: f64 = -1.0;

/// A quantity that may be given as `-1` or `?` to mark it unknown.
#[derive(Debug, Clone, Copy)]
struct Quantity(Option<f64>);

impl FromStr for Quantity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "?" {
            return Ok(Quantity(None));
        }
        let v = s
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("'{}' is not a number: {}", s, e))?;
        Ok(Quantity(if v == UNKNOWN { None } else { Some(v) }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Series {
    E3,
    E6,
    E12,
    E24,
}

impl Series {
    fn values(self) -> &'static RSeries {
        match self {
            Series::E3 => &*E3,
            Series::E6 => &*E6,
            Series::E12 => &*E12,
            Series::E24 => &*E24,
        }
    }
}

/// Voltage divider calculator
///
/// Give -1 (or ?) for the quantity to solve. With both resistors unknown, standard
/// resistor pairs approximating the output voltage are listed instead.
#[derive(Parser, Debug)]
#[command(author, version, about, allow_negative_numbers = true)]
struct Args {
    /// Supply voltage in volts
    #[arg(value_name = "VCC")]
    supply: f64,

    /// Output voltage in volts
    #[arg(value_name = "VOUT")]
    output: Quantity,

    /// Top resistor in ohms
    #[arg(value_name = "R1")]
    r1: Quantity,

    /// Bottom resistor in ohms
    #[arg(value_name = "R2")]
    r2: Quantity,

    /// Minimum current through R1 in amps when listing pairs, 0 disables
    #[arg(value_name = "I_MIN", default_value_t = 0.0)]
    min_current: f64,

    /// Preferred value series to draw pairs from
    #[arg(short, long, value_enum, default_value_t = Series::E24)]
    series: Series,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                return ExitCode::from(1);
            }
        },
    };

    init_logging(args.verbose);
    debug!(?args, "parsed arguments");

    let inputs = DividerInputs {
        supply: args.supply,
        output: args.output.0,
        r1: args.r1.0,
        r2: args.r2.0,
        min_current: args.min_current,
    };

    match inputs.solve(args.series.values()) {
        Ok(solution) => {
            print!("{}", solution);
            ExitCode::SUCCESS
        }
        Err(e) => {
            info!(error = ?e, "calculation failed");
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
