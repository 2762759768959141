pub mod coordinate;
pub mod error;

pub use coordinate::{convert, lla_to_ecef, EcefPosition, GeodeticPosition};
pub use error::{EcefError, Field, Result};
