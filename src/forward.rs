//! Geodetic → Cartesian forward conversion.
//!
//! The forward map has a simple closed form through the prime-vertical radius of curvature;
//! it is the analytic counterpart of the two inverse converters and serves as the round-trip
//! oracle in their tests.

use nalgebra::Vector3;

use crate::ellipsoid::Ellipsoid;
use crate::geodetic::Geodetic;

/// Convert geodetic coordinates to a body-fixed Cartesian position.
///
/// Arguments
/// ---------
/// * `geodetic`: geodetic latitude/longitude in radians, altitude in kilometers
/// * `ellipsoid`: reference ellipsoid with `a >= b > 0` (caller-guaranteed, not checked)
///
/// Return
/// ------
/// * The body-fixed Cartesian position in kilometers.
pub fn geodetic_to_ecef(geodetic: &Geodetic, ellipsoid: &Ellipsoid) -> Vector3<f64> {
    let e2 = ellipsoid.first_eccentricity_squared();

    let (sin_lat, cos_lat) = geodetic.latitude.sin_cos();
    let (sin_lon, cos_lon) = geodetic.longitude.sin_cos();

    // Prime-vertical radius of curvature at this latitude
    let n = ellipsoid.a / (1.0 - e2 * sin_lat * sin_lat).sqrt();

    Vector3::new(
        (n + geodetic.altitude) * cos_lat * cos_lon,
        (n + geodetic.altitude) * cos_lat * sin_lon,
        (n * (1.0 - e2) + geodetic.altitude) * sin_lat,
    )
}

#[cfg(test)]
mod forward_test {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::constants::{WGS84_MAJOR_AXIS, WGS84_MINOR_AXIS};

    #[test]
    fn test_equator_maps_to_semimajor_axis() {
        let geo = Geodetic {
            altitude: 0.0,
            longitude: 0.0,
            latitude: 0.0,
        };
        let pos = geodetic_to_ecef(&geo, &Ellipsoid::WGS84);

        assert_abs_diff_eq!(pos.x, WGS84_MAJOR_AXIS, epsilon = 1e-9);
        assert_eq!(pos.y, 0.0);
        assert_eq!(pos.z, 0.0);
    }

    #[test]
    fn test_pole_maps_to_semiminor_axis() {
        let geo = Geodetic {
            altitude: 0.0,
            longitude: 0.0,
            latitude: std::f64::consts::FRAC_PI_2,
        };
        let pos = geodetic_to_ecef(&geo, &Ellipsoid::WGS84);

        assert_abs_diff_eq!(pos.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pos.z, WGS84_MINOR_AXIS, epsilon = 1e-9);
    }

    #[test]
    fn test_altitude_moves_along_the_surface_normal() {
        let latitude = 0.62;
        let longitude = -1.9;
        let on_surface = geodetic_to_ecef(
            &Geodetic { altitude: 0.0, longitude, latitude },
            &Ellipsoid::WGS84,
        );
        let raised = geodetic_to_ecef(
            &Geodetic { altitude: 8.0, longitude, latitude },
            &Ellipsoid::WGS84,
        );

        // The offset has length h and is directed along the ellipsoidal normal
        let offset = raised - on_surface;
        assert_abs_diff_eq!(offset.norm(), 8.0, epsilon = 1e-9);

        let normal = Vector3::new(
            latitude.cos() * longitude.cos(),
            latitude.cos() * longitude.sin(),
            latitude.sin(),
        );
        assert_abs_diff_eq!(offset.dot(&normal), 8.0, epsilon = 1e-9);
    }
}
