//! Closed-form Cartesian → geodetic conversion (Heikkinen, 1982).
//!
//! Direct algebraic solution of the inverse geodetic problem through a real cube root: no
//! iteration, no convergence criterion, bit-for-bit reproducible for identical inputs. The
//! algebra is well defined everywhere except exactly on the polar axis of a perfect sphere,
//! where the published formulation has an intrinsic singularity.

use nalgebra::Vector3;

use crate::constants::Kilometer;
use crate::ellipsoid::Ellipsoid;
use crate::geodetic::Geodetic;

/// Convert a body-fixed Cartesian position to geodetic coordinates, closed form.
///
/// Arguments
/// ---------
/// * `position`: body-fixed Cartesian position, components in kilometers
/// * `ellipsoid`: reference ellipsoid with `a >= b > 0` (caller-guaranteed, not checked)
///
/// Return
/// ------
/// * The [`Geodetic`] triple: altitude in kilometers (signed), longitude and geodetic latitude
///   in radians.
///
/// Remarks
/// -------
/// * Total over finite inputs: the one radicand that floating-point rounding can push slightly
///   negative (near the poles and the equator) is clamped to zero instead of producing a NaN.
/// * The step order below follows the published formulation exactly; reordering the algebra
///   changes the rounding and breaks bit-level reproducibility against reference values.
pub fn ecef_to_geodetic(position: &Vector3<f64>, ellipsoid: &Ellipsoid) -> Geodetic {
    let (x, y, z) = (position.x, position.y, position.z);
    let (a, b) = (ellipsoid.a, ellipsoid.b);

    let e2 = ellipsoid.first_eccentricity_squared();
    let ep2 = ellipsoid.second_eccentricity_squared();
    let e4 = e2 * e2;

    // Cylindrical radius off the polar axis
    let r: Kilometer = (x * x + y * y).sqrt();
    let r2 = r * r;
    let z2 = z * z;

    let ff = 54.0 * b * b * z2;
    let g = r2 + (1.0 - e2) * z2 - e2 * (a * a - b * b);
    let c = e4 * ff * r2 / (g * g * g);

    // Real cube root; (1 + c) can sit either side of zero
    let s = (1.0 + c + (c * c + 2.0 * c).sqrt()).cbrt();

    let t = s + 1.0 / s + 1.0;
    let p = ff / (3.0 * t * t * g * g);
    let q = (1.0 + 2.0 * e4 * p).sqrt();

    // Rounding can push this radicand slightly below zero near the poles and the equator;
    // the clamp is mandatory, not cosmetic.
    let radicand = 0.5 * a * a * (1.0 + 1.0 / q)
        - p * (1.0 - e2) * z2 / (q * (1.0 + q))
        - 0.5 * p * r2;
    let r0 = -p * e2 * r / (1.0 + q) + radicand.max(0.0).sqrt();

    let d = r - e2 * r0;
    let u = (d * d + z2).sqrt();
    let v = (d * d + (1.0 - e2) * z2).sqrt();
    let z0 = b * b * z / (a * v);

    Geodetic {
        altitude: u * (1.0 - b * b / (a * v)),
        longitude: y.atan2(x),
        latitude: (z + ep2 * z0).atan2(r),
    }
}
