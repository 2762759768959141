//! Geodetic to ECEF coordinate conversion

mod parse;
mod transforms;

pub use parse::parse_number;
pub use transforms::{
    convert, lla_to_ecef,
    EcefPosition, GeodeticPosition,
    ECCENTRICITY, EQUATORIAL_RADIUS_KM,
};
