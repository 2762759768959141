use std::f64::consts::PI;

use nalgebra::Vector3;

/// Equatorial radius of the Earth model (km)
pub const EQUATORIAL_RADIUS_KM: f64 = 6378.1363;

/// First eccentricity of the Earth model
pub const ECCENTRICITY: f64 = 0.081819221456;

/// Geodetic position: latitude and longitude in degrees, height above the ellipsoid in km.
///
/// Values are not range checked. Latitudes beyond ±90° or longitudes beyond
/// ±180° still go through the formula; the result is just not physically meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticPosition {
    pub latitude_degrees: f64,
    pub longitude_degrees: f64,
    pub height_km: f64,
}

/// ECEF (Earth-Centered, Earth-Fixed) position in km
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EcefPosition {
    pub x_km: f64,
    pub y_km: f64,
    pub z_km: f64,
}

impl GeodeticPosition {
    pub fn new(latitude_degrees: f64, longitude_degrees: f64, height_km: f64) -> Self {
        Self {
            latitude_degrees,
            longitude_degrees,
            height_km,
        }
    }
}

impl EcefPosition {
    /// Distance from the Earth's center (km)
    pub fn radius_km(&self) -> f64 {
        Vector3::from(*self).norm()
    }
}

impl From<EcefPosition> for Vector3<f64> {
    fn from(p: EcefPosition) -> Self {
        Vector3::new(p.x_km, p.y_km, p.z_km)
    }
}

impl From<Vector3<f64>> for EcefPosition {
    fn from(v: Vector3<f64>) -> Self {
        Self {
            x_km: v.x,
            y_km: v.y,
            z_km: v.z,
        }
    }
}

// Kept as `deg * PI / 180`: f64::to_radians multiplies by a pre-divided
// constant and can differ in the last bit.
fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert latitude/longitude (degrees) and height above ellipsoid (km) to ECEF (km).
///
/// Total over finite input: the denominator never drops below
/// `sqrt(1 - e^2)`. NaN and infinities propagate.
pub fn convert(latitude_degrees: f64, longitude_degrees: f64, height_km: f64) -> (f64, f64, f64) {
    let lat_rad = deg_to_rad(latitude_degrees);
    let lon_rad = deg_to_rad(longitude_degrees);

    let sin_lat = lat_rad.sin();
    let e2 = ECCENTRICITY * ECCENTRICITY;
    let denom = (1.0 - e2 * (sin_lat * sin_lat)).sqrt();

    // Prime vertical radius of curvature and its polar-scaled counterpart
    let c = EQUATORIAL_RADIUS_KM / denom;
    let s = (EQUATORIAL_RADIUS_KM * (1.0 - e2)) / denom;

    let x = (c + height_km) * lat_rad.cos() * lon_rad.cos();
    let y = (c + height_km) * lat_rad.cos() * lon_rad.sin();
    let z = (s + height_km) * sin_lat;

    (x, y, z)
}

/// Convert a geodetic position to ECEF
pub fn lla_to_ecef(lla: &GeodeticPosition) -> EcefPosition {
    let (x_km, y_km, z_km) = convert(lla.latitude_degrees, lla.longitude_degrees, lla.height_km);
    EcefPosition { x_km, y_km, z_km }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_equator_prime_meridian() {
        let (x, y, z) = convert(0.0, 0.0, 0.0);

        assert!((x - EQUATORIAL_RADIUS_KM).abs() < TOL);
        assert!(y.abs() < TOL);
        assert!(z.abs() < TOL);
    }

    #[test]
    fn test_equator_ninety_east() {
        let (x, y, z) = convert(0.0, 90.0, 0.0);

        assert!(x.abs() < TOL);
        assert!((y - EQUATORIAL_RADIUS_KM).abs() < TOL);
        assert!(z.abs() < TOL);
    }

    #[test]
    fn test_north_pole() {
        let (x, y, z) = convert(90.0, 0.0, 0.0);

        let e2 = ECCENTRICITY * ECCENTRICITY;
        let polar = EQUATORIAL_RADIUS_KM * (1.0 - e2) / (1.0 - e2).sqrt();

        assert!(x.abs() < TOL);
        assert!(y.abs() < TOL);
        assert!((z - polar).abs() < TOL);
        assert!((z - 6356.751600562688).abs() < TOL);
    }

    #[test]
    fn test_regression_minneapolis() {
        let ecef = lla_to_ecef(&GeodeticPosition::new(45.0, -93.0, 0.2));

        assert!((ecef.x_km - -236.4398143295284).abs() < TOL);
        assert!((ecef.y_km - -4511.5404156428285).abs() < TOL);
        assert!((ecef.z_km - 4487.489320743808).abs() < TOL);
    }

    #[test]
    fn test_deterministic() {
        let a = convert(38.8977, -77.0365, 0.1);
        let b = convert(38.8977, -77.0365, 0.1);

        assert_eq!(a.0.to_bits(), b.0.to_bits());
        assert_eq!(a.1.to_bits(), b.1.to_bits());
        assert_eq!(a.2.to_bits(), b.2.to_bits());
    }

    #[test]
    fn test_latitude_sign_symmetry() {
        for &(lat, lon, h) in &[(45.0, -93.0, 0.2), (-33.8688, 151.2093, 0.05), (12.5, 200.0, -0.43)] {
            let north = convert(lat, lon, h);
            let south = convert(-lat, lon, h);

            assert!((north.0 - south.0).abs() < TOL);
            assert!((north.1 - south.1).abs() < TOL);
            assert!((north.2 + south.2).abs() < TOL);
            assert_eq!(north.2 > 0.0, deg_to_rad(lat).sin() > 0.0);
        }
    }

    #[test]
    fn test_height_raises_radius() {
        let ground = lla_to_ecef(&GeodeticPosition::new(35.6762, 139.6503, 0.0));
        let orbit = lla_to_ecef(&GeodeticPosition::new(35.6762, 139.6503, 400.0));

        assert!(orbit.radius_km() > ground.radius_km() + 399.0);
    }

    #[test]
    fn test_out_of_range_latitude_not_rejected() {
        // Beyond the pole the formula still evaluates
        let (x, y, z) = convert(95.0, 0.0, 0.0);
        assert!(x.is_finite() && y.is_finite() && z.is_finite());
        assert!(x < 0.0);
    }

    #[test]
    fn test_longitude_wraparound() {
        let a = convert(40.0, 181.0, 0.1);
        let b = convert(40.0, -179.0, 0.1);

        assert!((a.0 - b.0).abs() < 1e-6);
        assert!((a.1 - b.1).abs() < 1e-6);
        assert!((a.2 - b.2).abs() < 1e-6);
    }

    #[test]
    fn test_nan_propagates() {
        let (x, y, z) = convert(f64::NAN, 0.0, 0.0);
        assert!(x.is_nan() && y.is_nan() && z.is_nan());

        let (x, _, z) = convert(0.0, 0.0, f64::INFINITY);
        assert!(x.is_infinite());
        assert!(z.is_nan());
    }

    #[test]
    fn test_vector_conversion() {
        let ecef = lla_to_ecef(&GeodeticPosition::new(0.0, 0.0, 0.0));
        let v: Vector3<f64> = ecef.into();

        assert!((v.norm() - EQUATORIAL_RADIUS_KM).abs() < TOL);
        assert_eq!(EcefPosition::from(v), ecef);
    }
}
