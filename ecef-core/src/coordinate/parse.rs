use std::borrow::Cow;
use std::str::FromStr;

use super::transforms::GeodeticPosition;
use crate::error::{EcefError, Field, Result};

/// Parse one real-number literal (integer, decimal, scientific, signed).
///
/// Surrounding whitespace is ignored. Single underscores between digits
/// are accepted as separators (`1_000.5`).
pub fn parse_number(field: Field, input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let literal = strip_digit_separators(trimmed).unwrap_or(Cow::Borrowed(trimmed));

    literal.parse::<f64>().map_err(|source| EcefError::Parse {
        field,
        input: input.to_string(),
        source,
    })
}

/// `None` when an underscore is not flanked by digits on both sides
fn strip_digit_separators(s: &str) -> Option<Cow<'_, str>> {
    if !s.contains('_') {
        return Some(Cow::Borrowed(s));
    }

    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = i > 0 && bytes[i - 1].is_ascii_digit();
        let after = bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if !(before && after) {
            return None;
        }
    }
    Some(Cow::Owned(s.replace('_', "")))
}

impl GeodeticPosition {
    /// Build a position from exactly three arguments: latitude, longitude, height.
    ///
    /// The argument count is checked before any value is parsed.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let [lat, lon, hae] = args else {
            return Err(EcefError::Usage);
        };

        Ok(Self::new(
            parse_number(Field::Latitude, lat.as_ref())?,
            parse_number(Field::Longitude, lon.as_ref())?,
            parse_number(Field::Height, hae.as_ref())?,
        ))
    }
}

impl FromStr for GeodeticPosition {
    type Err = EcefError;

    /// Parse `"lat lon hae"` or `"lat, lon, hae"`
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        Self::from_args(&parts)
    }
}
