use serde::{Deserialize, Serialize};

use crate::constants::{Kilometer, WGS84_MAJOR_AXIS, WGS84_MINOR_AXIS};
use crate::geocart_errors::GeocartError;

/// An oblate (or spherical) reference ellipsoid, defined by its two semi-axes.
///
/// The shape invariant is `a >= b > 0`. [`Ellipsoid::new`] enforces it; the fields stay public
/// for callers that guarantee it themselves, since both converters treat malformed axes as a
/// caller error rather than something to detect per call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Equatorial (semimajor) radius in kilometers
    pub a: Kilometer,
    /// Polar (semiminor) radius in kilometers
    pub b: Kilometer,
}

impl Ellipsoid {
    /// The WGS84 reference ellipsoid, axes in kilometers.
    pub const WGS84: Ellipsoid = Ellipsoid {
        a: WGS84_MAJOR_AXIS,
        b: WGS84_MINOR_AXIS,
    };

    /// Build an ellipsoid after checking the shape invariant `a >= b > 0`.
    ///
    /// Arguments
    /// ---------
    /// * `a`: equatorial (semimajor) radius in kilometers
    /// * `b`: polar (semiminor) radius in kilometers
    ///
    /// Return
    /// ------
    /// * The validated [`Ellipsoid`], or a [`GeocartError`] describing which invariant failed.
    pub fn new(a: Kilometer, b: Kilometer) -> Result<Ellipsoid, GeocartError> {
        if a <= 0.0 || b <= 0.0 {
            return Err(GeocartError::NonPositiveAxis(a, b));
        }
        if b > a {
            return Err(GeocartError::ProlateEllipsoid(a, b));
        }
        Ok(Ellipsoid { a, b })
    }

    /// Flattening `f = (a - b) / a`. Zero for a sphere.
    pub fn flattening(&self) -> f64 {
        (self.a - self.b) / self.a
    }

    /// First eccentricity squared, `e² = 2f - f²`.
    pub fn first_eccentricity_squared(&self) -> f64 {
        let f = self.flattening();
        2.0 * f - f * f
    }

    /// Second eccentricity squared, `e'² = a²/b² - 1`.
    pub fn second_eccentricity_squared(&self) -> f64 {
        (self.a * self.a) / (self.b * self.b) - 1.0
    }
}

#[cfg(test)]
mod ellipsoid_test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_new_rejects_bad_axes() {
        assert_eq!(
            Ellipsoid::new(0.0, -1.0),
            Err(GeocartError::NonPositiveAxis(0.0, -1.0))
        );
        assert_eq!(
            Ellipsoid::new(6356.752, 6378.137),
            Err(GeocartError::ProlateEllipsoid(6356.752, 6378.137))
        );

        let sphere = Ellipsoid::new(1000.0, 1000.0).unwrap();
        assert_eq!(sphere.a, sphere.b);
    }

    #[test]
    fn test_wgs84_shape_parameters() {
        let wgs84 = Ellipsoid::WGS84;

        // Published WGS84 values: 1/f = 298.257223563, e² = 0.00669437999014
        assert_relative_eq!(
            wgs84.flattening(),
            1.0 / 298.257223563,
            epsilon = 1e-11
        );
        assert_relative_eq!(
            wgs84.first_eccentricity_squared(),
            0.00669437999014,
            epsilon = 1e-10
        );
        assert_relative_eq!(
            wgs84.second_eccentricity_squared(),
            0.00673949674228,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_sphere_has_zero_eccentricity() {
        let sphere = Ellipsoid { a: 2500.0, b: 2500.0 };
        assert_eq!(sphere.flattening(), 0.0);
        assert_eq!(sphere.first_eccentricity_squared(), 0.0);
        assert_eq!(sphere.second_eccentricity_squared(), 0.0);
    }
}
