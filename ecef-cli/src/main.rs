use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use ecef_core::{lla_to_ecef, EcefError, GeodeticPosition, Result};
use tracing::{debug, info, Level};

mod cli;
mod output;

use cli::Cli;
use output::Format;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => return report(&EcefError::Usage),
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let lla = GeodeticPosition::from_args(cli.values.as_slice())?;
    debug!(
        lat_deg = lla.latitude_degrees,
        lon_deg = lla.longitude_degrees,
        hae_km = lla.height_km,
        "parsed position"
    );

    let ecef = lla_to_ecef(&lla);
    info!(radius_km = ecef.radius_km(), "converted to ECEF");

    println!("{}", output::render(&ecef, Format::from_flag(cli.json)));
    Ok(())
}

/// Input errors are reported on stdout, like regular output
fn report(err: &EcefError) -> ExitCode {
    if let EcefError::Parse { field, input, .. } = err {
        debug!(%field, input = input.as_str(), "rejected argument");
    }
    println!("{err}");
    ExitCode::from(err.exit_code())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_max_level(level)
        .with_target(false)
        .init();
}
