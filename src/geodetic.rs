use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{Kilometer, Radian, DEGENERATE_ALTITUDE};
use crate::ellipsoid::Ellipsoid;
use crate::{heikkinen, olson};

/// Geodetic coordinates relative to a reference ellipsoid.
///
/// * `altitude` is signed height above the ellipsoid surface in kilometers (negative below it),
/// * `longitude` is in radians, in `(-π, π]` as produced by `atan2`,
/// * `latitude` is the **geodetic** latitude (surface-normal based, not geocentric) in radians,
///   in `[-π/2, π/2]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geodetic {
    pub altitude: Kilometer,
    pub longitude: Radian,
    pub latitude: Radian,
}

impl Geodetic {
    /// Whether this value is the degenerate-input sentinel of the Olson converter.
    ///
    /// For positions closer than [`DEGENERATE_RADIUS`](crate::constants::DEGENERATE_RADIUS) to
    /// the body center, [`olson::ecef_to_geodetic`] returns the fixed sentinel
    /// `(lat = 0, lon = 0, h = -1e7)` instead of a computed position. The sentinel is an
    /// ordinary in-band value, so callers **must** check for it explicitly; a zero-latitude,
    /// zero-longitude point 10 million kilometers below the surface is otherwise easy to
    /// mistake for a real result.
    pub fn is_degenerate(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0 && self.altitude == DEGENERATE_ALTITUDE
    }
}

/// Runtime selection between the two Cartesian → geodetic algorithms.
///
/// Both variants solve the same inverse problem over the same inputs; they differ only in
/// numerical strategy. See the module docs of [`heikkinen`] and [`olson`] for the trade-offs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversionMethod {
    /// Heikkinen's direct algebraic solution (no iteration).
    ClosedForm,
    /// Olson's series approximation with a single correction step.
    Iterative,
}

impl ConversionMethod {
    /// Convert a body-fixed Cartesian position to geodetic coordinates with the selected
    /// algorithm.
    pub fn convert(&self, position: &Vector3<f64>, ellipsoid: &Ellipsoid) -> Geodetic {
        match self {
            ConversionMethod::ClosedForm => heikkinen::ecef_to_geodetic(position, ellipsoid),
            ConversionMethod::Iterative => olson::ecef_to_geodetic(position, ellipsoid),
        }
    }
}

#[cfg(test)]
mod geodetic_test {
    use super::*;

    #[test]
    fn test_method_dispatch_matches_free_functions() {
        let position = Vector3::new(4201.0, 172.46, 4780.1);
        let wgs84 = Ellipsoid::WGS84;

        assert_eq!(
            ConversionMethod::ClosedForm.convert(&position, &wgs84),
            heikkinen::ecef_to_geodetic(&position, &wgs84)
        );
        assert_eq!(
            ConversionMethod::Iterative.convert(&position, &wgs84),
            olson::ecef_to_geodetic(&position, &wgs84)
        );
    }

    #[test]
    fn test_degenerate_sentinel_detection() {
        let sentinel = Geodetic {
            altitude: DEGENERATE_ALTITUDE,
            longitude: 0.0,
            latitude: 0.0,
        };
        assert!(sentinel.is_degenerate());

        let surface = Geodetic {
            altitude: 0.0,
            longitude: 0.0,
            latitude: 0.0,
        };
        assert!(!surface.is_degenerate());
    }
}
