//! Rendering of converted positions

use ecef_core::EcefPosition;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Plain,
    Json,
}

impl Format {
    pub fn from_flag(json: bool) -> Self {
        if json { Format::Json } else { Format::Plain }
    }
}

/// Shortest round-trip representation, always with a decimal point or
/// exponent. Non-finite values print as `nan`, `inf` and `-inf`.
fn format_km(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{value:?}")
    }
}

/// Render `ecef` without a trailing newline.
///
/// Plain output is one coordinate per line in x, y, z order. JSON has no
/// encoding for NaN or infinities, so those become `null`.
pub fn render(ecef: &EcefPosition, format: Format) -> String {
    match format {
        Format::Plain => format!(
            "{}\n{}\n{}",
            format_km(ecef.x_km),
            format_km(ecef.y_km),
            format_km(ecef.z_km)
        ),
        Format::Json => json!({
            "x_km": ecef.x_km,
            "y_km": ecef.y_km,
            "z_km": ecef.z_km,
        })
        .to_string(),
    }
}
