use std::fmt;
use std::num::ParseFloatError;

use thiserror::Error;

/// Geodetic input field an argument was parsed into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Latitude,
    Longitude,
    Height,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::Height => "height",
        };
        f.write_str(name)
    }
}

/// Errors raised while turning user input into a geodetic position.
///
/// The conversion itself is total, so every variant comes from input handling.
#[derive(Error, Debug)]
pub enum EcefError {
    #[error("Usage: python3 llh_to_ecef.py lat_deg lon_deg hae_km")]
    Usage,

    #[error("Error: Latitude, longitude, and altitude must be numbers.")]
    Parse {
        field: Field,
        input: String,
        #[source]
        source: ParseFloatError,
    },
}

impl EcefError {
    /// Process exit status for this error kind
    pub fn exit_code(&self) -> u8 {
        match self {
            EcefError::Usage => 2,
            EcefError::Parse { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, EcefError>;
