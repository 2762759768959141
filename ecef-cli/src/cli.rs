use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "llh_to_ecef",
    version,
    about = "Convert latitude, longitude and height above ellipsoid to ECEF coordinates (km)"
)]
pub struct Cli {
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Increase diagnostic logging on stderr (repeatable)"
    )]
    pub verbose: u8,
    /// lat_deg lon_deg hae_km
    #[arg(
        value_name = "VALUE",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub values: Vec<String>,
}
